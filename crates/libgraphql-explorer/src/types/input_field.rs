use crate::ast;
use crate::types::InputValueTrait;
use crate::types::TypeAnnotation;
use inherent::inherent;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputField {
    pub(super) default_value: Option<String>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) parent_type_name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl InputField {
    /// The description of this [`InputField`] as defined in the schema
    /// (e.g. in a `"""`-string immediately before the input field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn from_ast(
        parent_type_name: &str,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        Self {
            default_value: input_val.default_value.as_ref().map(|val| val.to_string()),
            description: input_val.description.to_owned(),
            name: input_val.name.to_string(),
            parent_type_name: parent_type_name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }
}

#[inherent]
impl InputValueTrait for InputField {
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn is_required(&self) -> bool;

    /// The name of this [`InputField`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// [`InputField`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
