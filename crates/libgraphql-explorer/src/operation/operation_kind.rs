use crate::ast;
use thiserror::Error;

/// The three kinds of operation definition an executable document may hold.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    /// The kind of an operation definition. The `{ ... }` shorthand form is a
    /// query.
    pub fn of_definition(def: &ast::operation::OperationDefinition) -> Self {
        use ast::operation::OperationDefinition;
        match def {
            OperationDefinition::Mutation(_) => Self::Mutation,
            OperationDefinition::Query(_)
            | OperationDefinition::SelectionSet(_) => Self::Query,
            OperationDefinition::Subscription(_) => Self::Subscription,
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl std::str::FromStr for OperationKind {
    type Err = ParseOperationKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mutation" => Ok(Self::Mutation),
            "query" => Ok(Self::Query),
            "subscription" => Ok(Self::Subscription),
            other => Err(ParseOperationKindError(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("`{0}` is not an operation kind (expected `query`, `mutation` or `subscription`)")]
pub struct ParseOperationKindError(pub String);
