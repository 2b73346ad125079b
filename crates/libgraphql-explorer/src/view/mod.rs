//! The headless explorer tree: one checkbox per schema entity, with the
//! selection state taken from the current document.

mod explorer_tree;
mod tree_builder;

pub use explorer_tree::ExplorerNode;
pub use explorer_tree::ExplorerNodeKind;
pub use explorer_tree::ExplorerTree;
pub(crate) use tree_builder::TreeBuilder;
