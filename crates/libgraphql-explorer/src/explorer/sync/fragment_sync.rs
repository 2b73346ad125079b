use crate::ast;
use crate::ast::operation::Selection;
use crate::ast::operation::SelectionSet;
use crate::ast::operation::TypeCondition;
use crate::explorer::CachedNode;
use crate::explorer::Diagnostic;
use crate::explorer::ExplorerPath;
use crate::explorer::sync::FieldSync;
use crate::explorer::sync::NodeSync;
use crate::explorer::sync::SelectionContainerSync;
use crate::explorer::sync::SyncContext;
use crate::types::ObjectType;

type Result<T> = std::result::Result<T, Diagnostic>;

/// Synchronizes an inline fragment on one possible type of an abstract
/// field. A fragment belongs to the possible type named by its type
/// condition, so fragments on different possible types never interfere.
pub struct FragmentSync<'s> {
    object_type: &'s ObjectType,
    path: ExplorerPath,
}
impl<'s> FragmentSync<'s> {
    pub fn new(object_type: &'s ObjectType, path: ExplorerPath) -> Self {
        Self { object_type, path }
    }
}

impl NodeSync for FragmentSync<'_> {
    type Node = Selection;

    /// A fresh fragment starts out with the fields picked by the configured
    /// [`DefaultSelectionPolicy`](crate::defaults::DefaultSelectionPolicy).
    fn construct(&self, ctx: &SyncContext<'_>) -> Result<Selection> {
        let mut selection_set = ast::operation::empty_selection_set();
        let default_field_names = ctx.selection_policy()
            .select_default_fields(ctx.schema(), self.object_type);
        for field_name in default_field_names {
            match self.object_type.fields().get(&field_name) {
                Some(field) => selection_set.items.push(
                    Selection::Field(FieldSync::field_node(ctx, field)),
                ),
                None => log::warn!(
                    "The default selection policy picked `{field_name}`, which \
                    is not a field of `{}`; ignoring it.",
                    self.object_type.name(),
                ),
            }
        }

        Ok(Selection::InlineFragment(ast::operation::InlineFragment {
            position: ast::operation::SYNTHETIC_POS,
            type_condition: Some(TypeCondition::On(self.object_type.name().to_string())),
            directives: vec![],
            selection_set,
        }))
    }

    fn from_cached(&self, cached: &CachedNode) -> Result<Selection> {
        match cached {
            CachedNode::Selection(selection @ Selection::InlineFragment(_)) =>
                Ok(selection.to_owned()),
            _ => Err(Diagnostic::InvariantViolation {
                path: self.path.to_owned(),
                detail: "the undo slot of a fragment holds a different kind of node".to_string(),
            }),
        }
    }

    fn into_cached(node: Selection) -> CachedNode {
        CachedNode::Selection(node)
    }

    fn matches(&self, node: &Selection) -> bool {
        match node {
            Selection::InlineFragment(fragment) => matches!(
                &fragment.type_condition,
                Some(TypeCondition::On(type_name)) if type_name == self.object_type.name()
            ),
            _ => false,
        }
    }

    fn path(&self) -> &ExplorerPath {
        &self.path
    }
}

impl SelectionContainerSync for FragmentSync<'_> {
    fn selection_set_mut(node: &mut Selection) -> Option<&mut SelectionSet> {
        match node {
            Selection::InlineFragment(fragment) => Some(&mut fragment.selection_set),
            _ => None,
        }
    }
}
