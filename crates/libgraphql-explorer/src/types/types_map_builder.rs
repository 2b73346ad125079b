use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeValidator;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Accumulates type definitions in declaration order and performs the
/// cross-type checks once every type is known.
#[derive(Debug)]
pub struct TypesMapBuilder {
    pub(super) types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn add_new_type(&mut self, type_: GraphQLType) -> Result<()> {
        let type_name = type_.name();
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                type_name: type_name.to_string(),
            });
        }

        if self.types.contains_key(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn get_type_mut(&mut self, type_name: &str) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    pub fn into_types_map(self) -> Result<IndexMap<String, GraphQLType>> {
        // Final validation of all types together.
        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::Enum(enum_type) => {
                    if enum_type.values().is_empty() {
                        errors.push(TypeValidationError::EnumWithNoValues {
                            type_name: enum_type.name().to_string(),
                        });
                    }
                },

                GraphQLType::InputObject(inputobj_type) => errors.append(
                    &mut InputObjectTypeValidator::new(inputobj_type, &self.types)
                        .validate()
                ),

                GraphQLType::Interface(iface_type) => {
                    self.validate_fields(iface_type.name(), iface_type.fields(), &mut errors);
                    self.validate_interface_names(
                        iface_type.name(),
                        iface_type.interface_names(),
                        &mut errors,
                    );
                },

                GraphQLType::Object(obj_type) => {
                    self.validate_fields(obj_type.name(), obj_type.fields(), &mut errors);
                    self.validate_interface_names(
                        obj_type.name(),
                        obj_type.interface_names(),
                        &mut errors,
                    );
                },

                GraphQLType::Union(union_type) => {
                    for member_name in union_type.member_type_names() {
                        match self.types.get(member_name) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(_) => errors.push(TypeValidationError::InvalidUnionMemberType {
                                member_name: member_name.to_string(),
                                union_name: union_type.name().to_string(),
                            }),
                            None => errors.push(TypeValidationError::UndefinedTypeName {
                                referencing_type_name: union_type.name().to_string(),
                                undefined_type_name: member_name.to_string(),
                            }),
                        }
                    }
                },
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(self.types)
    }

    fn validate_fields(
        &self,
        type_name: &str,
        fields: &IndexMap<String, Field>,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for field in fields.values() {
            let field_type_name = field.type_annotation().innermost_type_name();
            match self.types.get(field_type_name) {
                Some(GraphQLType::InputObject(_)) => errors.push(
                    TypeValidationError::InvalidOutputFieldWithInputType {
                        field_name: field.name().to_string(),
                        input_type_name: field_type_name.to_string(),
                        parent_type_name: type_name.to_string(),
                    }
                ),
                Some(_) => (),
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    referencing_type_name: type_name.to_string(),
                    undefined_type_name: field_type_name.to_string(),
                }),
            }

            for param in field.parameters().values() {
                let param_type_name = param.type_annotation().innermost_type_name();
                match self.types.get(param_type_name) {
                    Some(param_type) if param_type.is_composite() => errors.push(
                        TypeValidationError::InvalidParameterWithOutputType {
                            field_name: field.name().to_string(),
                            invalid_type_name: param_type_name.to_string(),
                            param_name: param.name().to_string(),
                            parent_type_name: type_name.to_string(),
                        }
                    ),
                    Some(_) => (),
                    None => errors.push(TypeValidationError::UndefinedTypeName {
                        referencing_type_name: type_name.to_string(),
                        undefined_type_name: param_type_name.to_string(),
                    }),
                }
            }
        }
    }

    fn validate_interface_names(
        &self,
        type_name: &str,
        interface_names: Vec<&str>,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for iface_name in interface_names {
            match self.types.get(iface_name) {
                Some(GraphQLType::Interface(_)) => (),
                Some(_) => errors.push(TypeValidationError::ImplementsNonInterfaceType {
                    type_name: type_name.to_string(),
                    non_interface_type_name: iface_name.to_string(),
                }),
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    referencing_type_name: type_name.to_string(),
                    undefined_type_name: iface_name.to_string(),
                }),
            }
        }
    }
}
impl Default for TypesMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
