use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents a fully typechecked and immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(crate) query_type: String,
    pub(crate) mutation_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// defined within this [`Schema`] in declaration order.
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Look up a single field declared on an object or interface type.
    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&Field> {
        self.fields_of(type_name)?.get(field_name)
    }

    /// The selectable fields of the named object or interface type.
    pub fn fields_of(&self, type_name: &str) -> Option<&IndexMap<String, Field>> {
        self.lookup_type(type_name)?.fields()
    }

    pub fn lookup_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_deref().and_then(|name| self.lookup_type(name))
    }

    /// The concrete object types that may stand in for the named abstract
    /// type: the members of a union, or every object type implementing an
    /// interface. Both are returned in declaration order. Non-abstract types
    /// have no possible types.
    pub fn possible_types(&self, abstract_type_name: &str) -> Vec<&ObjectType> {
        match self.lookup_type(abstract_type_name) {
            Some(GraphQLType::Union(union_type)) =>
                union_type.member_type_names()
                    .into_iter()
                    .filter_map(|member_name| {
                        self.lookup_type(member_name)?.as_object()
                    })
                    .collect(),

            Some(GraphQLType::Interface(iface_type)) =>
                self.types.values()
                    .filter_map(|type_| type_.as_object())
                    .filter(|obj_type| {
                        obj_type.interface_names().contains(&iface_type.name())
                    })
                    .collect(),

            _ => vec![],
        }
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// GraphQL defines an object type named "Query" as the _default_ Query
    /// type, but a `schema { query: ... }` block may name a different
    /// [`ObjectType`] instead. This factors in any such override.
    /// [`SchemaBuilder`] refuses schemas
    /// without one, so this is only `None` for hand-assembled schemas.
    pub fn query_type(&self) -> Option<&GraphQLType> {
        self.lookup_type(self.query_type.as_str())
    }

    /// The root operation type for the given [`OperationKind`], if the schema
    /// defines one.
    pub fn root_type(&self, kind: &OperationKind) -> Option<&GraphQLType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => self.query_type(),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_deref().and_then(|name| self.lookup_type(name))
    }
}
