use crate::explorer::ExplorerPath;
use crate::operation::OperationKind;
use thiserror::Error;

/// Why an explorer edit was not applied.
///
/// Diagnostics never escape the [`Explorer`](crate::explorer::Explorer) as
/// errors: the edit is abandoned, the document and undo cache are left as they
/// were, and the diagnostic is logged and returned inside
/// [`EditOutcome::Rejected`](crate::explorer::EditOutcome::Rejected).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Diagnostic {
    #[error("cannot construct a default value for `{name}` of list type `{type_annotation}`")]
    UnconstructibleDefault {
        name: String,
        type_annotation: String,
    },

    #[error("enum `{type_name}` declares no values")]
    EnumWithoutValues {
        type_name: String,
    },

    #[error("invariant violated at `{path}`: {detail}")]
    InvariantViolation {
        path: ExplorerPath,
        detail: String,
    },

    #[error("`{path}` is not a valid explorer path: {reason}")]
    InvalidPath {
        path: String,
        reason: String,
    },

    #[error("`{path}` holds a list-typed value, which the explorer does not edit")]
    ListTypedValue {
        path: ExplorerPath,
    },

    #[error("values of type `{type_name}` cannot be set from raw input: not a leaf type")]
    NonLeafValue {
        type_name: String,
    },

    #[error("`{path}` is not selected in the document")]
    NotSelected {
        path: ExplorerPath,
    },

    #[error("`{path}` cannot be edited because `{parent}` is not selected")]
    ParentNotSelected {
        parent: ExplorerPath,
        path: ExplorerPath,
    },

    #[error(
        "input object `{type_name}` contains itself through the fields being \
        defaulted"
    )]
    RecursiveInputDefault {
        type_name: String,
    },

    #[error("`{type_name}` has no argument named `{argument_name}`")]
    UnknownArgument {
        argument_name: String,
        type_name: String,
    },

    #[error("type `{type_name}` has no field named `{field_name}`")]
    UnknownField {
        field_name: String,
        type_name: String,
    },

    #[error("`{type_name}` is not a possible type of `{abstract_type_name}`")]
    UnknownFragmentType {
        abstract_type_name: String,
        type_name: String,
    },

    #[error("input object `{type_name}` has no field named `{field_name}`")]
    UnknownInputField {
        field_name: String,
        type_name: String,
    },

    #[error("the schema defines no {kind} root operation type")]
    UnknownOperationRoot {
        kind: OperationKind,
    },

    #[error("type `{type_name}` is not defined in the schema")]
    UnknownType {
        type_name: String,
    },

    #[error("expected {expected} at `{path}`, but the document holds {found}")]
    ValueKindMismatch {
        expected: &'static str,
        found: String,
        path: ExplorerPath,
    },
}
impl Diagnostic {
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }

    pub(crate) fn log(&self) {
        if self.is_invariant_violation() {
            log::error!("{self}");
        } else {
            log::warn!("{self}");
        }
    }
}
