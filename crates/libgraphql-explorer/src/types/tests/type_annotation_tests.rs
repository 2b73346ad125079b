use crate::ast;
use crate::types::TypeAnnotation;

fn annotation_of(type_str: &str) -> TypeAnnotation {
    let doc = ast::schema::parse(format!("type T {{ f: {type_str} }}").as_str())
        .expect("parse error");
    match &doc.definitions[0] {
        ast::schema::Definition::TypeDefinition(
            ast::schema::TypeDefinition::Object(obj_def),
        ) => TypeAnnotation::from_ast_type(&obj_def.fields[0].field_type),
        _ => panic!("expected an object type definition"),
    }
}

#[test]
fn named_nullable_annotation() {
    let annot = annotation_of("String");
    assert!(annot.nullable());
    assert!(!annot.is_list());
    assert_eq!(annot.innermost_type_name(), "String");
    assert_eq!(annot.to_string(), "String");
}

#[test]
fn named_non_null_annotation() {
    let annot = annotation_of("ID!");
    assert!(!annot.nullable());
    assert!(!annot.is_list());
    assert_eq!(annot.innermost_type_name(), "ID");
    assert_eq!(annot.to_string(), "ID!");
}

#[test]
fn nested_list_annotation_unwraps_to_innermost_name() {
    let annot = annotation_of("[[User!]]!");
    assert!(!annot.nullable());
    assert!(annot.is_list());
    assert_eq!(annot.innermost_type_name(), "User");
    assert!(!annot.innermost_named_type_annotation().nullable());
    assert_eq!(annot.to_string(), "[[User!]]!");

    let inner = annot.as_list_annotation()
        .expect("is a list annotation")
        .inner_type_annotation();
    assert!(inner.nullable());
    assert!(inner.is_list());
}
