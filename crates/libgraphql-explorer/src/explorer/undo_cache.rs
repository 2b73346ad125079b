use crate::ast::operation::Argument;
use crate::ast::operation::Selection;
use crate::explorer::ExplorerPath;
use std::collections::HashMap;

/// A node removed from the document, kept so that re-adding the same entity
/// restores it verbatim.
#[derive(Clone, Debug, PartialEq)]
pub enum CachedNode {
    /// A removed argument or input-object field.
    InputValue(Argument),

    /// A removed field or inline fragment, including every nested selection
    /// and argument it held.
    Selection(Selection),
}

/// One undo slot per explorer entity.
///
/// Each slot holds the most recently removed node for its [`ExplorerPath`].
/// Slots are overwritten by the next removal and survive re-adds, giving one
/// level of undo for quick toggle-off/toggle-on. Removing an entity also
/// clears the slots of everything below it.
#[derive(Clone, Debug, Default)]
pub struct UndoCache {
    entries: HashMap<ExplorerPath, CachedNode>,
}
impl UndoCache {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, path: &ExplorerPath) -> Option<&CachedNode> {
        self.entries.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Record the removal of the entity at `path`.
    pub fn record_removal(&mut self, path: ExplorerPath, node: CachedNode) {
        let before = self.entries.len();
        self.entries.retain(|cached_path, _| !cached_path.is_descendant_of(&path));
        let evicted = before - self.entries.len();
        if evicted > 0 {
            log::trace!("Evicted {evicted} undo slot(s) below `{path}`.");
        }

        log::trace!("Caching removed node for `{path}`.");
        self.entries.insert(path, node);
    }
}
