use crate::ast;
use crate::defaults::ScalarCoercion;
use crate::explorer::Diagnostic;
use crate::explorer::EditOutcome;
use crate::explorer::ExplorerConfig;
use crate::operation::OperationKind;
use crate::test_utils::explorer;
use crate::test_utils::explorer_with_config;
use crate::test_utils::normalize;
use crate::test_utils::path;
use crate::test_utils::test_schema;

mod adding_fields {
    use super::*;

    #[test]
    fn first_field_synthesizes_the_operation() {
        let schema = test_schema();
        let (mut explorer, sink) = explorer(&schema, "");

        assert_eq!(explorer.add(&path("query/ping")), EditOutcome::Applied);
        assert_eq!(explorer.text(), normalize("query { ping }"));
        assert_eq!(sink.emitted(), vec![normalize("query { ping }")]);
    }

    #[test]
    fn required_arguments_get_seed_values() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "{ viewer { id } }");

        assert!(explorer.add(&path("query/viewer/avatar")).is_applied());
        assert_eq!(
            explorer.text(),
            normalize(r#"{ viewer { id avatar(size: 10, format: "") } }"#),
        );
    }

    #[test]
    fn required_enum_and_boolean_arguments() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "");

        assert!(explorer.add(&path("mutation/setRole")).is_applied());
        assert_eq!(
            explorer.text(),
            normalize(r#"mutation { setRole(id: "", role: EDITOR, notify: false) }"#),
        );
    }

    #[test]
    fn argument_with_schema_default_is_optional() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "");

        assert!(explorer.add(&path("query/withDefault")).is_applied());
        assert_eq!(explorer.text(), normalize("query { withDefault }"));
    }

    #[test]
    fn required_input_objects_are_built_recursively() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "");

        assert!(explorer.add(&path("mutation/createUser")).is_applied());
        assert_eq!(explorer.text(), normalize(r#"
            mutation {
                createUser(input: {
                    name: "",
                    role: EDITOR,
                    address: {street: "", city: ""},
                })
            }
        "#));
    }

    #[test]
    fn list_typed_required_arguments_are_skipped() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "");

        assert!(explorer.add(&path("query/withList")).is_applied());
        assert_eq!(explorer.text(), normalize("query { withList(limit: 10) }"));

        let outcome = explorer.add(&path("query/withList/arg:ids"));
        assert!(matches!(
            outcome.diagnostic(),
            Some(Diagnostic::UnconstructibleDefault { name, .. }) if name == "ids",
        ));
        assert_eq!(explorer.text(), normalize("query { withList(limit: 10) }"));
    }

    #[test]
    fn new_fields_are_appended_after_existing_siblings() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "query Q { viewer { email id } }");

        assert!(explorer.add(&path("query/viewer/name")).is_applied());
        assert_eq!(explorer.text(), normalize("query Q { viewer { email id name } }"));
    }

    #[test]
    fn adding_a_selected_field_is_unchanged() {
        let schema = test_schema();
        let (mut explorer, sink) = explorer(&schema, "{ viewer { n: name } }");

        assert_eq!(explorer.add(&path("query/viewer/name")), EditOutcome::Unchanged);
        assert_eq!(explorer.text(), "{ viewer { n: name } }");
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn with_leaf_subfields_on_absent_field() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "");

        assert!(explorer.add_with_leaf_subfields(&path("query/viewer")).is_applied());
        assert_eq!(explorer.text(), normalize(r#"
            query {
                viewer { id name email role avatar(size: 10, format: "") }
            }
        "#));
    }

    #[test]
    fn with_leaf_subfields_on_present_field_fills_the_gaps() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "{ stats(limit: 3) { label } }");

        assert!(explorer.add_with_leaf_subfields(&path("query/stats")).is_applied());
        assert_eq!(
            explorer.text(),
            normalize("{ stats(limit: 3) { label count average } }"),
        );
        assert_eq!(
            explorer.add_with_leaf_subfields(&path("query/stats")),
            EditOutcome::Unchanged,
        );
    }

    #[test]
    fn optional_arguments_follow_the_argument_policy() {
        let schema = test_schema();
        let config = ExplorerConfig::new()
            .with_argument_policy(|parent: &str, _: &dyn crate::types::InputValueTrait| {
                parent == "avatar"
            });
        let (mut explorer, _sink) = explorer_with_config(&schema, config, "{ viewer { id } }");

        assert!(explorer.add(&path("query/viewer/avatar")).is_applied());
        assert_eq!(
            explorer.text(),
            normalize(r#"{ viewer { id avatar(size: 10, format: "", rounded: false) } }"#),
        );
    }
}

mod removing_and_restoring {
    use super::*;

    #[test]
    fn untouched_siblings_are_preserved() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(
            &schema,
            r#"query Q { viewer { id avatar(size: 64, format: "png") email } }"#,
        );

        assert!(explorer.toggle(&path("query/viewer/avatar")).is_applied());
        assert_eq!(explorer.text(), normalize("query Q { viewer { id email } }"));

        assert!(explorer.toggle(&path("query/viewer/avatar")).is_applied());
        assert_eq!(
            explorer.text(),
            normalize(r#"query Q { viewer { id email avatar(size: 64, format: "png") } }"#),
        );
    }

    #[test]
    fn re_adding_restores_hand_edited_nested_selections() {
        let schema = test_schema();
        let original = normalize(r#"
            query Q($size: Int!) {
                ping
                viewer {
                    me: id
                    avatar(size: $size, format: "png")
                    friends(first: 3, tags: ["close"]) {
                        name
                        ... on Named { name }
                    }
                }
            }
        "#);
        let (mut explorer, _sink) = explorer(&schema, &original);

        assert!(explorer.remove(&path("query/viewer")).is_applied());
        assert_eq!(explorer.text(), normalize("query Q($size: Int!) { ping }"));

        assert!(explorer.add(&path("query/viewer")).is_applied());
        assert_eq!(explorer.text(), original);
    }

    #[test]
    fn undo_slot_survives_the_re_add() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "{ ping viewer { email } }");

        for _ in 0..3 {
            assert!(explorer.toggle(&path("query/viewer")).is_applied());
            assert_eq!(explorer.text(), normalize("{ ping }"));
            assert!(explorer.toggle(&path("query/viewer")).is_applied());
            assert_eq!(explorer.text(), normalize("{ ping viewer { email } }"));
        }
    }

    #[test]
    fn removing_a_parent_evicts_child_undo_slots() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(
            &schema,
            "{ ping viewer { id friends(first: 2, tags: []) { name } } }",
        );

        assert!(explorer.remove(&path("query/viewer/friends")).is_applied());
        assert!(explorer.undo_cache().get(&path("query/viewer/friends")).is_some());

        assert!(explorer.remove(&path("query/viewer")).is_applied());
        assert!(explorer.undo_cache().get(&path("query/viewer/friends")).is_none());

        assert!(explorer.add(&path("query/viewer")).is_applied());
        assert!(explorer.add(&path("query/viewer/friends")).is_applied());
        assert_eq!(explorer.text(), normalize("{ ping viewer { id friends } }"));
    }

    #[test]
    fn arguments_are_restored_with_their_values() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "{ stats(limit: 99) { count } }");

        assert!(explorer.remove(&path("query/stats/arg:limit")).is_applied());
        assert_eq!(explorer.text(), normalize("{ stats { count } }"));

        assert!(explorer.add(&path("query/stats/arg:limit")).is_applied());
        assert_eq!(explorer.text(), normalize("{ stats(limit: 99) { count } }"));
    }

    #[test]
    fn removing_an_absent_field_is_unchanged() {
        let schema = test_schema();
        let (mut explorer, sink) = explorer(&schema, "{ ping }");

        assert_eq!(explorer.remove(&path("query/viewer")), EditOutcome::Unchanged);
        assert!(explorer.undo_cache().is_empty());
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn only_the_first_duplicate_is_removed() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "{ viewer { a: name b: name } }");

        assert!(explorer.remove(&path("query/viewer/name")).is_applied());
        assert_eq!(explorer.text(), normalize("{ viewer { b: name } }"));
        assert!(explorer.is_selected(&path("query/viewer/name")));
    }
}

mod operation_lifecycle {
    use super::*;

    #[test]
    fn removing_last_selection_drops_the_operation() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "
            query Q { ping }
            mutation M { rate(score: 1.5) { count } }
        ");

        assert!(explorer.remove(&path("query/ping")).is_applied());
        assert_eq!(explorer.text(), normalize("mutation M { rate(score: 1.5) { count } }"));
    }

    #[test]
    fn dropping_the_only_operation_empties_the_text() {
        let schema = test_schema();
        let (mut explorer, sink) = explorer(&schema, "{ ping }");

        assert!(explorer.remove(&path("query/ping")).is_applied());
        assert_eq!(explorer.text(), "");
        assert_eq!(sink.emitted(), vec![String::new()]);
    }

    #[test]
    fn new_operation_is_prepended() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "
            fragment F on User { id }
            query Q { ping }
        ");

        assert!(explorer.add(&path("mutation/rate")).is_applied());
        assert_eq!(explorer.text(), normalize("
            mutation { rate(score: 1.5) }
            fragment F on User { id }
            query Q { ping }
        "));
    }

    #[test]
    fn only_the_first_operation_of_a_kind_is_edited() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "
            query A { ping }
            query B { viewer { id } }
        ");

        assert!(explorer.add(&path("query/viewer")).is_applied());
        assert_eq!(explorer.text(), normalize("
            query A { ping viewer }
            query B { viewer { id } }
        "));
    }

    #[test]
    fn dropped_operation_comes_back_with_its_header() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "query GetUser($id: ID!) { user(id: $id) { id } }");

        assert!(explorer.remove(&path("query/user")).is_applied());
        assert_eq!(explorer.text(), "");

        assert!(explorer.add(&path("query/ping")).is_applied());
        assert_eq!(explorer.text(), normalize("query GetUser($id: ID!) { ping }"));
    }

    #[test]
    fn schema_without_subscription_root() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "");

        assert_eq!(
            explorer.add(&path("subscription/ping")).diagnostic(),
            Some(&Diagnostic::UnknownOperationRoot {
                kind: OperationKind::Subscription,
            }),
        );
        assert!(explorer.tree(OperationKind::Subscription).is_none());
    }
}

mod abstract_fragments {
    use super::*;

    #[test]
    fn fragments_start_with_policy_fields() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, r#"{ node(id: "1") { id } }"#);

        assert!(explorer.add(&path("query/node/on:User")).is_applied());
        assert!(explorer.add(&path("query/node/on:Post")).is_applied());
        assert_eq!(explorer.text(), normalize(r#"
            { node(id: "1") { id ... on User { id email } ... on Post { id } } }
        "#));
    }

    #[test]
    fn fragments_on_different_types_are_independent() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, r#"
            { node(id: "1") { id ... on User { name } ... on Post { title } } }
        "#);

        assert!(explorer.remove(&path("query/node/on:User")).is_applied());
        assert_eq!(explorer.text(), normalize(r#"
            { node(id: "1") { id ... on Post { title } } }
        "#));

        assert!(explorer.add(&path("query/node/on:Post/body")).is_applied());
        assert!(explorer.add(&path("query/node/on:User")).is_applied());
        assert_eq!(explorer.text(), normalize(r#"
            { node(id: "1") { id ... on Post { title body } ... on User { name } } }
        "#));
    }

    #[test]
    fn union_members_get_fragments() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, r#"{ search(term: "x") { __typename } }"#);

        assert!(explorer.add(&path("query/search/on:Bot")).is_applied());
        assert_eq!(explorer.text(), normalize(r#"
            { search(term: "x") { __typename ... on Bot { name model } } }
        "#));
    }

    #[test]
    fn custom_selection_policy() {
        let schema = test_schema();
        let config = ExplorerConfig::new()
            .with_selection_policy(|_: &crate::schema::Schema, _: &crate::types::ObjectType| {
                vec!["avatar".to_string(), "missing".to_string()]
            });
        let (mut explorer, _sink) = explorer_with_config(&schema, config, r#"{ named { name } }"#);

        assert!(explorer.add(&path("query/named/on:User")).is_applied());
        assert_eq!(explorer.text(), normalize(r#"
            { named { name ... on User { avatar(size: 10, format: "") } } }
        "#));
    }

    #[test]
    fn fragment_on_a_type_outside_the_abstract_type() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, r#"{ named { name } }"#);

        assert_eq!(
            explorer.add(&path("query/named/on:Post")).diagnostic(),
            Some(&Diagnostic::UnknownFragmentType {
                abstract_type_name: "Named".to_string(),
                type_name: "Post".to_string(),
            }),
        );
    }
}

mod input_values {
    use super::*;

    #[test]
    fn input_fields_are_added_inside_the_object_literal() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, r#"
            mutation { createUser(input: {name: "Ann", role: ADMIN, address: {street: "a", city: "b"}}) { id } }
        "#);

        assert!(explorer.add(&path("mutation/createUser/arg:input/field:address/field:zip")).is_applied());
        assert!(explorer.add(&path("mutation/createUser/arg:input/field:nickname")).is_applied());
        assert_eq!(explorer.text(), normalize(r#"
            mutation {
                createUser(input: {
                    name: "Ann",
                    role: ADMIN,
                    address: {street: "a", city: "b", zip: ""},
                    nickname: "",
                }) { id }
            }
        "#));
    }

    #[test]
    fn input_fields_round_trip_through_the_undo_cache() {
        let schema = test_schema();
        let text = r#"
            mutation { createUser(input: {name: "Ann", role: ADMIN, address: {street: "a", city: "b", note: "x"}}) { id } }
        "#;
        let (mut explorer, _sink) = explorer(&schema, text);

        assert!(explorer.remove(&path("mutation/createUser/arg:input/field:address")).is_applied());
        assert!(explorer.add(&path("mutation/createUser/arg:input/field:address")).is_applied());
        assert_eq!(explorer.text(), normalize(text));
    }

    #[test]
    fn variables_are_never_descended_into() {
        let schema = test_schema();
        let text = "mutation M($input: CreateUserInput!) { createUser(input: $input) { id } }";
        let (mut explorer, sink) = explorer(&schema, text);

        assert_eq!(
            explorer.add(&path("mutation/createUser/arg:input/field:nickname")).diagnostic(),
            Some(&Diagnostic::ValueKindMismatch {
                expected: "an object literal",
                found: "the variable `$input`".to_string(),
                path: path("mutation/createUser/arg:input"),
            }),
        );
        assert_eq!(explorer.text(), text);
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn unknown_argument() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "{ ping }");

        assert_eq!(
            explorer.add(&path("query/ping/arg:verbose")).diagnostic(),
            Some(&Diagnostic::UnknownArgument {
                argument_name: "verbose".to_string(),
                type_name: "Query.ping".to_string(),
            }),
        );
    }
}

mod setting_values {
    use super::*;

    const SET_ROLE: &str = r#"mutation { setRole(id: "1", role: ADMIN, notify: true) { id } }"#;

    #[test]
    fn enum_value() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, SET_ROLE);

        assert!(explorer.set_value(&path("mutation/setRole/arg:role"), "VIEWER").is_applied());
        assert_eq!(
            explorer.text(),
            normalize(r#"mutation { setRole(id: "1", role: VIEWER, notify: true) { id } }"#),
        );
    }

    #[test]
    fn unknown_enum_value_falls_back_to_first_declared() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, SET_ROLE);

        assert!(explorer.set_value(&path("mutation/setRole/arg:role"), "SUPERUSER").is_applied());
        assert_eq!(
            explorer.text(),
            normalize(r#"mutation { setRole(id: "1", role: EDITOR, notify: true) { id } }"#),
        );
    }

    #[test]
    fn non_boolean_text_is_false() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, SET_ROLE);

        assert!(explorer.set_value(&path("mutation/setRole/arg:notify"), "notabool").is_applied());
        assert_eq!(
            explorer.text(),
            normalize(r#"mutation { setRole(id: "1", role: ADMIN, notify: false) { id } }"#),
        );
    }

    #[test]
    fn numbers_parse_or_fall_back_to_strings() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "mutation { rate(score: 1.5) { count } }");

        assert!(explorer.set_value(&path("mutation/rate/arg:score"), "2.25").is_applied());
        assert_eq!(explorer.text(), normalize("mutation { rate(score: 2.25) { count } }"));

        assert!(explorer.set_value(&path("mutation/rate/arg:score"), "abc").is_applied());
        assert_eq!(explorer.text(), normalize(r#"mutation { rate(score: "abc") { count } }"#));
    }

    #[test]
    fn registered_scalar_coercion() {
        let schema = test_schema();
        let config = ExplorerConfig::new().with_scalar_coercion("Long", ScalarCoercion::Int);
        let (mut explorer, _sink) = explorer_with_config(
            &schema,
            config,
            "mutation { rate(score: 1.5) { count } }",
        );

        assert!(explorer.add(&path("mutation/rate/arg:weight")).is_applied());
        assert_eq!(explorer.text(), normalize("mutation { rate(score: 1.5, weight: 10) { count } }"));

        assert!(explorer.set_value(&path("mutation/rate/arg:weight"), "42").is_applied());
        assert_eq!(explorer.text(), normalize("mutation { rate(score: 1.5, weight: 42) { count } }"));
    }

    #[test]
    fn unregistered_custom_scalars_are_strings() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "mutation { rate(score: 1.5) { count } }");

        assert!(explorer.add(&path("mutation/rate/arg:weight")).is_applied());
        assert!(explorer.set_value(&path("mutation/rate/arg:weight"), "42").is_applied());
        assert_eq!(
            explorer.text(),
            normalize(r#"mutation { rate(score: 1.5, weight: "42") { count } }"#),
        );
    }

    #[test]
    fn same_value_is_unchanged() {
        let schema = test_schema();
        let (mut explorer, sink) = explorer(&schema, SET_ROLE);

        assert_eq!(
            explorer.set_value(&path("mutation/setRole/arg:role"), "ADMIN"),
            EditOutcome::Unchanged,
        );
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn whole_float_set_twice_is_unchanged() {
        let schema = test_schema();
        let (mut explorer, sink) = explorer(&schema, "mutation { rate(score: 1.5) { count } }");

        assert!(explorer.set_value(&path("mutation/rate/arg:score"), "10").is_applied());
        assert_eq!(explorer.text(), normalize("mutation { rate(score: 10) { count } }"));
        assert_eq!(
            explorer.set_value(&path("mutation/rate/arg:score"), "10"),
            EditOutcome::Unchanged,
        );
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn huge_float_keeps_the_document_parseable() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "mutation { rate(score: 1.5) { count } }");

        assert!(explorer.set_value(&path("mutation/rate/arg:score"), "1e20").is_applied());
        assert!(ast::operation::parse(explorer.text()).is_ok());

        assert!(explorer.add(&path("mutation/rate/arg:weight")).is_applied());
        assert_eq!(
            explorer.text(),
            normalize(r#"mutation { rate(score: "1e20", weight: "") { count } }"#),
        );
    }

    #[test]
    fn nested_input_field_value() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, r#"
            { viewer { posts(filter: {published: false}) { id } } }
        "#);

        assert!(explorer.set_value(&path("query/viewer/posts/arg:filter/field:published"), "true").is_applied());
        assert_eq!(explorer.text(), normalize(r#"
            { viewer { posts(filter: {published: true}) { id } } }
        "#));
    }

    #[test]
    fn variables_are_never_overwritten() {
        let schema = test_schema();
        let text = "query Q($id: ID!) { user(id: $id) { id } }";
        let (mut explorer, sink) = explorer(&schema, text);

        assert_eq!(
            explorer.set_value(&path("query/user/arg:id"), "5").diagnostic(),
            Some(&Diagnostic::ValueKindMismatch {
                expected: "a leaf literal",
                found: "the variable `$id`".to_string(),
                path: path("query/user/arg:id"),
            }),
        );
        assert_eq!(explorer.text(), text);
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn absent_argument() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "{ stats { count } }");

        assert_eq!(
            explorer.set_value(&path("query/stats/arg:limit"), "5").diagnostic(),
            Some(&Diagnostic::NotSelected {
                path: path("query/stats/arg:limit"),
            }),
        );
    }

    #[test]
    fn input_object_values_are_not_leaves() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "{ viewer { posts(filter: {published: true}) { id } } }");

        assert_eq!(
            explorer.set_value(&path("query/viewer/posts/arg:filter"), "x").diagnostic(),
            Some(&Diagnostic::NonLeafValue {
                type_name: "PostFilter".to_string(),
            }),
        );
    }

    #[test]
    fn list_values_are_not_edited() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, r#"{ withList(ids: ["1"], limit: 1) { id } }"#);

        assert_eq!(
            explorer.set_value(&path("query/withList/arg:ids"), "2").diagnostic(),
            Some(&Diagnostic::ListTypedValue {
                path: path("query/withList/arg:ids"),
            }),
        );
    }

    #[test]
    fn fields_hold_no_values() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "{ ping }");

        assert!(matches!(
            explorer.set_value(&path("query/ping"), "x").diagnostic(),
            Some(Diagnostic::InvalidPath { .. }),
        ));
    }
}

mod session {
    use super::*;

    #[test]
    fn descending_into_an_unselected_parent() {
        let schema = test_schema();
        let (mut explorer, sink) = explorer(&schema, "{ ping }");

        assert_eq!(
            explorer.add(&path("query/viewer/name")).diagnostic(),
            Some(&Diagnostic::ParentNotSelected {
                parent: path("query/viewer"),
                path: path("query/viewer/name"),
            }),
        );
        assert_eq!(explorer.text(), "{ ping }");
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn unknown_field() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "");

        assert_eq!(
            explorer.add(&path("query/nope")).diagnostic(),
            Some(&Diagnostic::UnknownField {
                field_name: "nope".to_string(),
                type_name: "Query".to_string(),
            }),
        );
    }

    #[test]
    fn rejected_edits_leave_the_undo_cache_alone() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "{ ping viewer { id } }");

        assert!(explorer.remove(&path("query/viewer/nope")).diagnostic().is_some());
        assert!(explorer.undo_cache().is_empty());
    }

    #[test]
    fn sink_sees_every_applied_edit_once() {
        let schema = test_schema();
        let (mut explorer, sink) = explorer(&schema, "");

        explorer.add(&path("query/ping"));
        explorer.add(&path("query/ping"));
        explorer.add(&path("query/viewer"));
        explorer.remove(&path("query/nope"));
        explorer.remove(&path("query/viewer"));

        assert_eq!(sink.emitted(), vec![
            normalize("query { ping }"),
            normalize("query { ping viewer }"),
            normalize("query { ping }"),
        ]);
        assert_eq!(explorer.text(), normalize("query { ping }"));
    }

    #[test]
    fn set_text_does_not_notify() {
        let schema = test_schema();
        let (mut explorer, sink) = explorer(&schema, "{ ping }");

        explorer.set_text("{ viewer { id } }");
        assert_eq!(sink.len(), 0);
        assert!(explorer.is_selected(&path("query/viewer/id")));
        assert!(!explorer.is_selected(&path("query/ping")));
    }

    #[test]
    fn invalid_text_edits_the_last_good_document() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, "{ viewer { id } }");
        assert!(explorer.is_selected(&path("query/viewer")));

        explorer.set_text("{ viewer { id ");
        assert!(explorer.is_selected(&path("query/viewer/id")));

        assert!(explorer.add(&path("query/ping")).is_applied());
        assert_eq!(explorer.text(), normalize("{ viewer { id } ping }"));
    }

    #[test]
    fn is_selected_follows_identity_rules() {
        let schema = test_schema();
        let (mut explorer, _sink) = explorer(&schema, r#"
            query { node(id: "1") { ... on User { handle: name } } }
            mutation { createUser(input: {name: "a", role: ADMIN, address: {street: "", city: ""}}) { id } }
        "#);

        assert!(explorer.is_selected(&path("query/node/arg:id")));
        assert!(explorer.is_selected(&path("query/node/on:User/name")));
        assert!(!explorer.is_selected(&path("query/node/on:Post")));
        assert!(explorer.is_selected(&path("mutation/createUser/arg:input/field:address/field:city")));
        assert!(!explorer.is_selected(&path("mutation/createUser/arg:input/field:nickname")));
        assert!(!explorer.is_selected(&path("subscription/ping")));
    }
}
