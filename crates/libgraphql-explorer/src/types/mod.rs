mod enum_type;
mod field;
mod graphql_type;
mod input_field;
mod input_object_type;
mod input_object_type_validator;
mod input_value_trait;
mod interface_type;
mod list_type_annotation;
mod named_type_annotation;
mod object_or_interface_type_data;
mod object_type;
mod parameter;
mod scalar_type;
mod type_annotation;
mod type_builder;
mod types_map_builder;
mod union_type;

pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub(crate) use input_object_type_validator::InputObjectTypeValidator;
pub use input_value_trait::InputValueTrait;
pub use interface_type::InterfaceType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub(crate) use type_builder::TypeBuilderHelpers;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
