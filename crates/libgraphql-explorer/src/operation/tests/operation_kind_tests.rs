use crate::ast;
use crate::operation::OperationKind;
use crate::operation::ParseOperationKindError;

#[test]
fn parse_and_display_round_trip() {
    for kind in [OperationKind::Query, OperationKind::Mutation, OperationKind::Subscription] {
        assert_eq!(kind.to_string().parse::<OperationKind>(), Ok(kind));
    }
    assert_eq!(OperationKind::Subscription.to_string(), "subscription");
}

#[test]
fn unknown_kind_is_an_error() {
    assert_eq!(
        "fragment".parse::<OperationKind>(),
        Err(ParseOperationKindError("fragment".to_string())),
    );
}

#[test]
fn shorthand_definition_is_a_query() {
    let doc = ast::operation::parse("{ ping } mutation { rate(score: 1.5) { count } }")
        .expect("parse error");
    let kinds: Vec<OperationKind> = doc.definitions
        .iter()
        .filter_map(|def| match def {
            ast::operation::Definition::Operation(op_def) =>
                Some(OperationKind::of_definition(op_def)),
            ast::operation::Definition::Fragment(_) => None,
        })
        .collect();
    assert_eq!(kinds, vec![OperationKind::Query, OperationKind::Mutation]);
}
