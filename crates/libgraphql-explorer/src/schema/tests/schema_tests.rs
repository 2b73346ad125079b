use crate::operation::OperationKind;
use crate::test_utils;

#[test]
fn types_keep_declaration_order() {
    let schema = test_utils::test_schema();
    let names: Vec<&str> = schema.all_types().keys().map(|name| name.as_str()).collect();

    // Built-in scalars first, then the SDL in source order.
    assert_eq!(&names[..7], &["Boolean", "Float", "ID", "Int", "String", "Date", "Long"]);
    assert_eq!(names.last(), Some(&"Mutation"));
}

#[test]
fn possible_types_of_interface() {
    let schema = test_utils::test_schema();

    let node_types: Vec<&str> = schema.possible_types("Node")
        .into_iter()
        .map(|obj| obj.name())
        .collect();
    assert_eq!(node_types, vec!["User", "Post"]);

    let named_types: Vec<&str> = schema.possible_types("Named")
        .into_iter()
        .map(|obj| obj.name())
        .collect();
    assert_eq!(named_types, vec!["User", "Bot"]);
}

#[test]
fn possible_types_of_union_follow_member_order() {
    let schema = test_utils::test_schema();
    let members: Vec<&str> = schema.possible_types("SearchResult")
        .into_iter()
        .map(|obj| obj.name())
        .collect();
    assert_eq!(members, vec!["User", "Post", "Bot"]);
}

#[test]
fn concrete_types_have_no_possible_types() {
    let schema = test_utils::test_schema();
    assert!(schema.possible_types("User").is_empty());
    assert!(schema.possible_types("Undefined").is_empty());
}

#[test]
fn root_types() {
    let schema = test_utils::test_schema();
    assert_eq!(schema.root_type(&OperationKind::Query).map(|t| t.name()), Some("Query"));
    assert_eq!(schema.root_type(&OperationKind::Mutation).map(|t| t.name()), Some("Mutation"));
    assert!(schema.root_type(&OperationKind::Subscription).is_none());
}

#[test]
fn field_lookup() {
    let schema = test_utils::test_schema();
    let user_field = schema.field("Query", "user").expect("Query.user exists");
    assert_eq!(user_field.type_annotation().to_string(), "User");
    assert_eq!(user_field.parent_type_name(), "Query");
    assert!(schema.field("Query", "missing").is_none());
    assert!(schema.field("Role", "EDITOR").is_none());
}
