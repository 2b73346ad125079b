use crate::types::Field;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub(super) struct ObjectOrInterfaceTypeData {
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) interfaces: Vec<String>,
    pub(super) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(super) fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(super) fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub(super) fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_name| iface_name.as_str())
            .collect()
    }

    pub(super) fn name(&self) -> &str {
        self.name.as_str()
    }
}
