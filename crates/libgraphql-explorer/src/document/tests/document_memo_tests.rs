use crate::document;
use crate::document::DocumentMemo;

#[test]
fn empty_text_yields_empty_document() {
    let mut memo = DocumentMemo::new();
    assert!(memo.resolve("").definitions.is_empty());
    assert!(memo.resolve("  \n\t").definitions.is_empty());
    assert_eq!(memo.last_good_text(), None);
}

#[test]
fn valid_text_is_remembered() {
    let mut memo = DocumentMemo::new();
    let doc = memo.resolve("{ ping }");
    assert_eq!(doc.definitions.len(), 1);
    assert_eq!(memo.last_good_text(), Some("{ ping }"));
}

#[test]
fn invalid_text_falls_back_to_last_good_parse() {
    let mut memo = DocumentMemo::new();
    let good = memo.resolve("query { viewer { id } }");

    let fallback = memo.resolve("query { viewer { id ");
    assert_eq!(document::serialize(&fallback), document::serialize(&good));
    assert_eq!(memo.last_good_text(), Some("query { viewer { id } }"));
}

#[test]
fn invalid_text_without_history_is_empty() {
    let mut memo = DocumentMemo::new();
    assert!(memo.resolve("query {").definitions.is_empty());
}

#[test]
fn newer_valid_text_replaces_the_memo() {
    let mut memo = DocumentMemo::new();
    memo.resolve("{ ping }");
    memo.resolve("{ viewer { id } }");
    let fallback = memo.resolve("{ viewer {");
    assert_eq!(
        document::serialize(&fallback),
        crate::test_utils::normalize("{ viewer { id } }"),
    );
}

#[test]
fn empty_document_serializes_to_empty_text() {
    assert_eq!(document::serialize(&document::empty_document()), "");
}
