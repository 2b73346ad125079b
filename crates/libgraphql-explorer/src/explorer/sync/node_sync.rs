use crate::ast::operation::Selection;
use crate::ast::operation::SelectionSet;
use crate::explorer::CachedNode;
use crate::explorer::Diagnostic;
use crate::explorer::ExplorerPath;
use crate::explorer::sync::SyncContext;

type Result<T> = std::result::Result<T, Diagnostic>;

/// A sibling list handed back by a synchronizer, plus whether it differs
/// from the list that was handed in.
#[derive(Clone, Debug, PartialEq)]
pub struct Spliced<N> {
    pub changed: bool,
    pub nodes: Vec<N>,
}
impl<N> Spliced<N> {
    pub fn changed(nodes: Vec<N>) -> Self {
        Self {
            changed: true,
            nodes,
        }
    }

    pub fn unchanged(nodes: Vec<N>) -> Self {
        Self {
            changed: false,
            nodes,
        }
    }
}

/// Keeps one schema entity in sync with the sibling list that may hold it.
///
/// Synchronizers take ownership of a sibling list and hand back its
/// replacement. Siblings that an edit does not touch are moved through
/// untouched and in their original order; new nodes are only ever appended.
pub trait NodeSync {
    type Node;

    /// Build a fresh node for this entity from schema defaults.
    fn construct(&self, ctx: &SyncContext<'_>) -> Result<Self::Node>;

    /// Recover a node of this kind from an undo slot.
    fn from_cached(&self, cached: &CachedNode) -> Result<Self::Node>;

    fn into_cached(node: Self::Node) -> CachedNode;

    /// The identity rule: does `node` belong to this entity?
    fn matches(&self, node: &Self::Node) -> bool;

    fn path(&self) -> &ExplorerPath;

    /// Append this entity to `siblings`: verbatim from the undo cache if a
    /// removed node is cached, freshly constructed otherwise. Adding an entity
    /// that is already present changes nothing.
    fn add(
        &self,
        ctx: &mut SyncContext<'_>,
        mut siblings: Vec<Self::Node>,
    ) -> Result<Spliced<Self::Node>> {
        if self.position(&siblings).is_some() {
            return Ok(Spliced::unchanged(siblings));
        }

        let node = match ctx.cached(self.path()) {
            Some(cached) => {
                log::trace!("Restoring `{}` from its undo slot.", self.path());
                self.from_cached(cached)?
            },
            None => self.construct(ctx)?,
        };
        log::debug!("Adding `{}`.", self.path());
        siblings.push(node);
        Ok(Spliced::changed(siblings))
    }

    fn find<'n>(&self, siblings: &'n [Self::Node]) -> Option<&'n Self::Node> {
        siblings.iter().find(|node| self.matches(node))
    }

    fn position(&self, siblings: &[Self::Node]) -> Option<usize> {
        siblings.iter().position(|node| self.matches(node))
    }

    /// Drop this entity's node from `siblings` and stage it for the undo
    /// cache. Only the first matching node is dropped; removing an absent
    /// entity changes nothing.
    fn remove(
        &self,
        ctx: &mut SyncContext<'_>,
        mut siblings: Vec<Self::Node>,
    ) -> Result<Spliced<Self::Node>> {
        let Some(idx) = self.position(&siblings) else {
            return Ok(Spliced::unchanged(siblings));
        };

        let removed = siblings.remove(idx);
        log::debug!("Removing `{}`.", self.path());
        ctx.stage_removal(self.path().to_owned(), Self::into_cached(removed));
        Ok(Spliced::changed(siblings))
    }

    /// Like [`NodeSync::position`], but a missing node is an error: `target`
    /// (a descendant of this entity) cannot be edited without it.
    fn require_position(
        &self,
        siblings: &[Self::Node],
        target: &ExplorerPath,
    ) -> Result<usize> {
        self.position(siblings).ok_or_else(|| Diagnostic::ParentNotSelected {
            parent: self.path().to_owned(),
            path: target.to_owned(),
        })
    }
}

/// Synchronizers of selections that carry a nested selection set (fields
/// and inline fragments).
pub trait SelectionContainerSync: NodeSync<Node = Selection> {
    fn selection_set_mut(node: &mut Selection) -> Option<&mut SelectionSet>;

    /// Hand this entity's nested selections to `edit` and splice back what it
    /// returns. Nothing above the nested list is re-validated.
    fn modify_selections<'a, F>(
        &self,
        ctx: &mut SyncContext<'a>,
        mut siblings: Vec<Selection>,
        target: &ExplorerPath,
        edit: F,
    ) -> Result<Spliced<Selection>>
    where
        F: FnOnce(&mut SyncContext<'a>, Vec<Selection>) -> Result<Spliced<Selection>>,
    {
        let idx = self.require_position(&siblings, target)?;
        let selection_set = Self::selection_set_mut(&mut siblings[idx])
            .ok_or_else(|| Diagnostic::InvariantViolation {
                path: self.path().to_owned(),
                detail: "the matched selection carries no selection set".to_string(),
            })?;

        let nested = std::mem::take(&mut selection_set.items);
        let spliced = edit(ctx, nested)?;
        selection_set.items = spliced.nodes;

        Ok(Spliced {
            changed: spliced.changed,
            nodes: siblings,
        })
    }
}
