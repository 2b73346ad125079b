//! The synchronization engine: explorer paths, per-entity synchronizers, the
//! undo cache, and the [`Explorer`] session that ties them to a document.

mod diagnostic;
mod edit_outcome;
#[allow(clippy::module_inception)]
mod explorer;
mod explorer_config;
mod explorer_path;
mod node_lookup;
pub mod sync;
mod undo_cache;

pub use diagnostic::Diagnostic;
pub use edit_outcome::EditOutcome;
pub use explorer::Explorer;
pub use explorer_config::ExplorerConfig;
pub use explorer_path::ExplorerPath;
pub use explorer_path::PathSegment;
pub(crate) use node_lookup::FoundNode;
pub(crate) use node_lookup::lookup;
pub use sync::FieldAddMode;
pub use undo_cache::CachedNode;
pub use undo_cache::UndoCache;

#[cfg(test)]
mod tests;
