mod dispatch;
mod field_sync;
mod fragment_sync;
mod input_value_sync;
mod node_sync;
mod sync_context;

pub(crate) use dispatch::EditAction;
pub(crate) use dispatch::edit_operation;
pub use field_sync::FieldAddMode;
pub use field_sync::FieldSync;
pub use fragment_sync::FragmentSync;
pub use input_value_sync::InputValueSync;
pub use node_sync::NodeSync;
pub use node_sync::SelectionContainerSync;
pub use node_sync::Spliced;
pub use sync_context::SyncContext;
