use crate::ast::operation::Value;
use crate::explorer::ExplorerPath;
use crate::types::GraphQLType;
use crate::types::InputValueTrait;

/// A selected leaf argument (or input field) whose value editor is being
/// rendered.
#[derive(Clone, Copy)]
pub struct ControlTarget<'a> {
    pub input_value: &'a dyn InputValueTrait,
    pub leaf_type: &'a GraphQLType,
    pub path: &'a ExplorerPath,
    pub value: &'a Value,
}
impl ControlTarget<'_> {
    /// The current value as an editor would display it: string contents
    /// without quotes, enum values by name, anything else in GraphQL syntax.
    pub fn raw_value(&self) -> String {
        match self.value {
            Value::Enum(name) => name.to_owned(),
            Value::String(text) => text.to_owned(),
            other => other.to_string(),
        }
    }
}
