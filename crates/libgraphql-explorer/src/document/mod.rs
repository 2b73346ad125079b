mod document_memo;
mod document_sink;

pub use document_memo::DocumentMemo;
pub use document_sink::DocumentSink;

use crate::ast::operation::Document;

/// Serialize a document to its canonical, pretty-printed text. A document
/// with no definitions serializes to the empty string.
pub fn serialize(document: &Document) -> String {
    document.to_string()
}

/// A document with zero definitions.
pub fn empty_document() -> Document {
    Document {
        definitions: vec![],
    }
}

#[cfg(test)]
mod tests;
