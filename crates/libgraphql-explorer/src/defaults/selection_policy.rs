use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectType;
use inherent::inherent;

/// Picks the fields that are selected automatically when an object type is
/// first expanded (for example when an inline fragment on it is added).
///
/// Runs exactly once per expansion; it never revisits an already-expanded
/// selection.
pub trait DefaultSelectionPolicy {
    fn select_default_fields(&self, schema: &Schema, object_type: &ObjectType) -> Vec<String>;
}

impl<F> DefaultSelectionPolicy for F
where
    F: Fn(&Schema, &ObjectType) -> Vec<String>,
{
    fn select_default_fields(&self, schema: &Schema, object_type: &ObjectType) -> Vec<String> {
        self(schema, object_type)
    }
}

/// The built-in selection heuristic. The first matching rule wins:
///
/// 1. `id`, plus `email` if present or else `name` if present.
/// 2. `edges` alone.
/// 3. `node` alone.
/// 4. `nodes` alone.
/// 5. Up to the first two leaf-typed fields, in declaration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicSelectionPolicy;

#[inherent]
impl DefaultSelectionPolicy for HeuristicSelectionPolicy {
    pub fn select_default_fields(
        &self,
        schema: &Schema,
        object_type: &ObjectType,
    ) -> Vec<String> {
        let fields = object_type.fields();

        if fields.contains_key("id") {
            let mut selected = vec!["id".to_string()];
            if fields.contains_key("email") {
                selected.push("email".to_string());
            } else if fields.contains_key("name") {
                selected.push("name".to_string());
            }
            return selected;
        }

        for connection_field in ["edges", "node", "nodes"] {
            if fields.contains_key(connection_field) {
                return vec![connection_field.to_string()];
            }
        }

        fields.values()
            .filter(|field| is_leaf_field(schema, field))
            .take(2)
            .map(|field| field.name().to_string())
            .collect()
    }
}

pub(crate) fn is_leaf_field(schema: &Schema, field: &Field) -> bool {
    field.type_annotation()
        .innermost_type(schema)
        .is_some_and(|type_| type_.is_leaf())
}
