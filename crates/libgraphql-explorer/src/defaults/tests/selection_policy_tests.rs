use crate::defaults::HeuristicSelectionPolicy;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::test_utils::test_schema;

fn selected(schema: &Schema, type_name: &str) -> Vec<String> {
    let object_type = schema.lookup_type(type_name)
        .and_then(|type_| type_.as_object())
        .expect("object type exists");
    HeuristicSelectionPolicy.select_default_fields(schema, object_type)
}

#[test]
fn id_with_email() {
    assert_eq!(selected(&test_schema(), "User"), vec!["id", "email"]);
}

#[test]
fn id_alone() {
    assert_eq!(selected(&test_schema(), "Post"), vec!["id"]);
}

#[test]
fn id_with_name() {
    let schema = SchemaBuilder::build_from_str("
        type Query { tag: Tag }
        type Tag { label: String name: String id: ID! }
    ").expect("schema builds");
    assert_eq!(selected(&schema, "Tag"), vec!["id", "name"]);
}

#[test]
fn connection_edges() {
    assert_eq!(selected(&test_schema(), "UserConnection"), vec!["edges"]);
}

#[test]
fn edge_node() {
    assert_eq!(selected(&test_schema(), "UserEdge"), vec!["node"]);
}

#[test]
fn nodes_list() {
    let schema = SchemaBuilder::build_from_str("
        type Query { page: Page }
        type Page { total: Int nodes: [Item!]! }
        type Item { label: String }
    ").expect("schema builds");
    assert_eq!(selected(&schema, "Page"), vec!["nodes"]);
}

#[test]
fn first_two_leaf_fields() {
    assert_eq!(selected(&test_schema(), "Bot"), vec!["name", "model"]);
    assert_eq!(selected(&test_schema(), "PageInfo"), vec!["hasNextPage", "endCursor"]);
}

#[test]
fn no_leaf_fields() {
    let schema = SchemaBuilder::build_from_str("
        type Query { a: A }
        type A { b: B }
        type B { a: A }
    ").expect("schema builds");
    assert!(selected(&schema, "A").is_empty());
}
