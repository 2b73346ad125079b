/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: Vec<EnumValue>,
}
impl EnumType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The first value declared on this enum. Declaration order is retained,
    /// so this is *not* the alphabetically-first value.
    pub fn first_value(&self) -> Option<&EnumValue> {
        self.values.first()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Look up a declared value by its exact name.
    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|value| value.name == name)
    }

    /// All declared values in declaration order.
    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl EnumValue {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
