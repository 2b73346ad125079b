mod operation_kind;
mod operation_resolver;

pub use operation_kind::OperationKind;
pub use operation_kind::ParseOperationKindError;
pub use operation_resolver::OperationResolver;
pub use operation_resolver::PreviousOperations;
pub use operation_resolver::selection_set;

#[cfg(test)]
mod tests;
