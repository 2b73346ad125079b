/// A custom [scalar type](https://spec.graphql.org/October2021/#sec-Scalars)
/// declared in the schema (built-in scalars have their own
/// [`GraphQLType`](crate::types::GraphQLType) variants).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl ScalarType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
