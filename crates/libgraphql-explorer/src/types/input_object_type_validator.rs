use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Checks the fields of an [`InputObjectType`]: every referenced type must be
/// a defined input type, and chains of input objects must be broken by at
/// least one nullable field. The latter is what makes recursively defaulting
/// required input fields terminate.
pub(crate) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        self.validate_field_types();
        self.validate_fields_recursive(
            self.type_.name(),
            self.type_.fields(),
            &mut vec![],
            HashSet::from([self.type_.name()]),
        );
        self.errors
    }

    fn validate_field_types(&mut self) {
        for (field_name, field) in self.type_.fields() {
            let innermost_type_name = field.type_annotation().innermost_type_name();
            match self.types_map.get(innermost_type_name) {
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    referencing_type_name: self.type_.name().to_string(),
                    undefined_type_name: innermost_type_name.to_string(),
                }),

                // Input object fields can not be declared with an output type.
                //
                // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
                Some(type_) if type_.is_composite() => self.errors.push(
                    TypeValidationError::InvalidInputFieldWithOutputType {
                        field_name: field_name.to_owned(),
                        invalid_type_name: innermost_type_name.to_string(),
                        parent_type_name: self.type_.name().to_string(),
                    }
                ),

                Some(_) => (),
            }
        }
    }

    fn validate_fields_recursive(
        &mut self,
        type_name: &'a str,
        fields: &'a IndexMap<String, InputField>,
        path: &mut Vec<(&'a str, Option<&'a str>)>,
        seen_type_names: HashSet<&'a str>,
    ) {
        for (field_name, field) in fields {
            // Look for input-type cycles that aren't broken by at least one
            // nullable type.
            if annot_contains_cycle_breaking_nullable_type(field.type_annotation()) {
                continue;
            }

            let innermost_type_name = field.type_annotation().innermost_type_name();
            path.extend_from_slice(&[
                (type_name, Some(field_name.as_str())),
                (innermost_type_name, None),
            ]);
            if seen_type_names.contains(innermost_type_name) {
                self.errors.push(TypeValidationError::CircularInputFieldChain {
                    circular_field_path: path.iter().map(|(type_name, field_name)| {
                        if let Some(field_name) = field_name {
                            format!("{type_name}.{field_name}")
                        } else {
                            type_name.to_string()
                        }
                    }).collect(),
                });
            } else if let Some(GraphQLType::InputObject(input_obj_type)) =
                self.types_map.get(innermost_type_name) {
                let mut seen_type_names = seen_type_names.clone();
                seen_type_names.insert(innermost_type_name);
                self.validate_fields_recursive(
                    innermost_type_name,
                    input_obj_type.fields(),
                    path,
                    seen_type_names,
                );
            }
            path.truncate(path.len() - 2);
        }
    }
}

fn annot_contains_cycle_breaking_nullable_type(type_annot: &TypeAnnotation) -> bool {
    match type_annot {
        TypeAnnotation::List(list_annot) =>
            list_annot.nullable() || annot_contains_cycle_breaking_nullable_type(
                list_annot.inner_type_annotation()
            ),
        TypeAnnotation::Named(named_annot) =>
            named_annot.nullable(),
    }
}
