use crate::ast;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Converts `graphql_parser` schema definitions (and extensions) into
/// [`GraphQLType`]s.
pub struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    pub fn type_from_ast(def: &ast::schema::TypeDefinition) -> Result<GraphQLType> {
        use ast::schema::TypeDefinition;
        Ok(match def {
            TypeDefinition::Enum(enum_def) => {
                let mut values = vec![];
                for value_def in &enum_def.values {
                    if values.iter().any(|v: &EnumValue| v.name == value_def.name) {
                        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                            enum_name: enum_def.name.to_string(),
                            value_name: value_def.name.to_string(),
                        });
                    }
                    values.push(EnumValue {
                        description: value_def.description.to_owned(),
                        name: value_def.name.to_string(),
                    });
                }
                GraphQLType::Enum(EnumType {
                    description: enum_def.description.to_owned(),
                    name: enum_def.name.to_string(),
                    values,
                })
            },

            TypeDefinition::InputObject(inputobj_def) =>
                GraphQLType::InputObject(InputObjectType {
                    description: inputobj_def.description.to_owned(),
                    fields: Self::inputobject_fields_from_ast(
                        inputobj_def.name.as_str(),
                        &inputobj_def.fields,
                    )?,
                    name: inputobj_def.name.to_string(),
                }),

            TypeDefinition::Interface(iface_def) =>
                GraphQLType::Interface(InterfaceType(ObjectOrInterfaceTypeData {
                    description: iface_def.description.to_owned(),
                    fields: Self::object_fields_from_ast(
                        iface_def.name.as_str(),
                        &iface_def.fields,
                    )?,
                    interfaces: iface_def.implements_interfaces.to_owned(),
                    name: iface_def.name.to_string(),
                })),

            TypeDefinition::Object(obj_def) =>
                GraphQLType::Object(ObjectType(ObjectOrInterfaceTypeData {
                    description: obj_def.description.to_owned(),
                    fields: Self::object_fields_from_ast(
                        obj_def.name.as_str(),
                        &obj_def.fields,
                    )?,
                    interfaces: obj_def.implements_interfaces.to_owned(),
                    name: obj_def.name.to_string(),
                })),

            TypeDefinition::Scalar(scalar_def) =>
                GraphQLType::Scalar(ScalarType {
                    description: scalar_def.description.to_owned(),
                    name: scalar_def.name.to_string(),
                }),

            TypeDefinition::Union(union_def) =>
                GraphQLType::Union(UnionType {
                    description: union_def.description.to_owned(),
                    members: union_def.types.to_owned(),
                    name: union_def.name.to_string(),
                }),
        })
    }

    /// Merge the additions of a type extension into an already-defined type.
    pub fn apply_extension(
        type_: &mut GraphQLType,
        ext: &ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        match (type_, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(enum_ext)) => {
                for value_def in &enum_ext.values {
                    if enum_type.value(value_def.name.as_str()).is_some() {
                        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                            enum_name: enum_type.name.to_owned(),
                            value_name: value_def.name.to_string(),
                        });
                    }
                    enum_type.values.push(EnumValue {
                        description: value_def.description.to_owned(),
                        name: value_def.name.to_string(),
                    });
                }
            },

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(inputobj_ext)) => {
                let new_fields = Self::inputobject_fields_from_ast(
                    inputobj_type.name.as_str(),
                    &inputobj_ext.fields,
                )?;
                Self::merge_fields(
                    inputobj_type.name.as_str(),
                    &mut inputobj_type.fields,
                    new_fields,
                )?;
            },

            (GraphQLType::Interface(InterfaceType(data)), TypeExtension::Interface(iface_ext)) => {
                let new_fields = Self::object_fields_from_ast(
                    data.name.as_str(),
                    &iface_ext.fields,
                )?;
                Self::merge_fields(data.name.as_str(), &mut data.fields, new_fields)?;
                data.interfaces.extend(iface_ext.implements_interfaces.iter().cloned());
            },

            (GraphQLType::Object(ObjectType(data)), TypeExtension::Object(obj_ext)) => {
                let new_fields = Self::object_fields_from_ast(
                    data.name.as_str(),
                    &obj_ext.fields,
                )?;
                Self::merge_fields(data.name.as_str(), &mut data.fields, new_fields)?;
                data.interfaces.extend(obj_ext.implements_interfaces.iter().cloned());
            },

            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => (),

            (GraphQLType::Union(union_type), TypeExtension::Union(union_ext)) =>
                union_type.members.extend(union_ext.types.iter().cloned()),

            (type_, _) => return Err(SchemaBuildError::InvalidExtensionType {
                type_name: type_.name().to_string(),
            }),
        }
        Ok(())
    }

    pub fn inputobject_fields_from_ast(
        type_name: &str,
        input_fields: &[ast::schema::InputValue],
    ) -> Result<IndexMap<String, InputField>> {
        let mut field_map = IndexMap::new();
        for field in input_fields {
            // The input field must not have a name which begins with the
            // characters "__" (two underscores).
            //
            // https://spec.graphql.org/October2021/#sel-IAHhBXDDBDCAACCTx5b
            if field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if field_map.contains_key(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            field_map.insert(
                field.name.to_string(),
                InputField::from_ast(type_name, field),
            );
        }
        Ok(field_map)
    }

    pub fn object_fields_from_ast(
        type_name: &str,
        fields: &[ast::schema::Field],
    ) -> Result<IndexMap<String, Field>> {
        let mut field_map = IndexMap::new();
        for field in fields {
            if field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if field_map.contains_key(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            field_map.insert(field.name.to_string(), Field::from_ast(type_name, field));
        }
        Ok(field_map)
    }

    fn merge_fields<T>(
        type_name: &str,
        fields: &mut IndexMap<String, T>,
        new_fields: IndexMap<String, T>,
    ) -> Result<()> {
        for (field_name, field) in new_fields {
            if fields.contains_key(field_name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    field_name,
                    type_name: type_name.to_string(),
                });
            }
            fields.insert(field_name, field);
        }
        Ok(())
    }
}
