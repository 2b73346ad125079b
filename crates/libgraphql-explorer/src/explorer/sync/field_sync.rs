use crate::ast;
use crate::ast::operation::Argument;
use crate::ast::operation::Selection;
use crate::ast::operation::SelectionSet;
use crate::defaults::is_leaf_field;
use crate::explorer::CachedNode;
use crate::explorer::Diagnostic;
use crate::explorer::ExplorerPath;
use crate::explorer::sync::NodeSync;
use crate::explorer::sync::SelectionContainerSync;
use crate::explorer::sync::Spliced;
use crate::explorer::sync::SyncContext;
use crate::types::Field;

type Result<T> = std::result::Result<T, Diagnostic>;

/// How a field is selected when it is added.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FieldAddMode {
    /// Required default arguments only, no sub-selection. Sub-selections are
    /// added when the field's own children are toggled.
    #[default]
    Bare,

    /// Also select every leaf-typed subfield of an object or interface typed
    /// field ("select all"). Adding in this mode to an already selected field
    /// selects whichever leaf subfields are still missing.
    WithLeafSubfields,
}

/// Synchronizes a schema [`Field`] with a selection list. A field selection
/// belongs to the schema field with the same name; aliases are ignored.
pub struct FieldSync<'s> {
    field: &'s Field,
    path: ExplorerPath,
}
impl<'s> FieldSync<'s> {
    /// Select this field together with its leaf subfields. See
    /// [`FieldAddMode::WithLeafSubfields`].
    pub fn add_with_leaf_subfields(
        &self,
        ctx: &mut SyncContext<'_>,
        mut siblings: Vec<Selection>,
    ) -> Result<Spliced<Selection>> {
        let leaf_subfields: Vec<&Field> = ctx.schema()
            .fields_of(self.field.type_annotation().innermost_type_name())
            .map(|fields| {
                fields.values()
                    .filter(|subfield| is_leaf_field(ctx.schema(), subfield))
                    .collect()
            })
            .unwrap_or_default();

        let Some(idx) = self.position(&siblings) else {
            let mut node = Self::field_node(ctx, self.field);
            node.selection_set.items = leaf_subfields.into_iter()
                .map(|subfield| Selection::Field(Self::field_node(ctx, subfield)))
                .collect();
            log::debug!("Adding `{}` with its leaf subfields.", self.path);
            siblings.push(Selection::Field(node));
            return Ok(Spliced::changed(siblings));
        };

        let selection_set = Self::selection_set_mut(&mut siblings[idx])
            .ok_or_else(|| self.not_a_field())?;
        let mut changed = false;
        for subfield in leaf_subfields {
            let already_selected = selection_set.items.iter().any(|selection| {
                matches!(selection, Selection::Field(f) if f.name == subfield.name())
            });
            if !already_selected {
                selection_set.items.push(Selection::Field(Self::field_node(ctx, subfield)));
                changed = true;
            }
        }

        if changed {
            log::debug!("Selected the missing leaf subfields of `{}`.", self.path);
        }
        Ok(Spliced {
            changed,
            nodes: siblings,
        })
    }

    /// A fresh selection of `field`: its default arguments and an empty
    /// selection set.
    pub(crate) fn field_node(ctx: &SyncContext<'_>, field: &Field) -> ast::operation::Field {
        ast::operation::Field {
            position: ast::operation::SYNTHETIC_POS,
            alias: None,
            name: field.name().to_string(),
            arguments: ctx.generator().default_required_arguments(field),
            directives: vec![],
            selection_set: ast::operation::empty_selection_set(),
        }
    }

    /// Hand this field's argument list to `edit` and splice back what it
    /// returns.
    pub fn modify_arguments<'a, F>(
        &self,
        ctx: &mut SyncContext<'a>,
        mut siblings: Vec<Selection>,
        target: &ExplorerPath,
        edit: F,
    ) -> Result<Spliced<Selection>>
    where
        F: FnOnce(&mut SyncContext<'a>, Vec<Argument>) -> Result<Spliced<Argument>>,
    {
        let idx = self.require_position(&siblings, target)?;
        let Selection::Field(field_node) = &mut siblings[idx] else {
            return Err(self.not_a_field());
        };

        let arguments = std::mem::take(&mut field_node.arguments);
        let spliced = edit(ctx, arguments)?;
        field_node.arguments = spliced.nodes;

        Ok(Spliced {
            changed: spliced.changed,
            nodes: siblings,
        })
    }

    pub fn new(field: &'s Field, path: ExplorerPath) -> Self {
        Self { field, path }
    }

    fn not_a_field(&self) -> Diagnostic {
        Diagnostic::InvariantViolation {
            path: self.path.to_owned(),
            detail: "the matched selection is not a field".to_string(),
        }
    }
}

impl NodeSync for FieldSync<'_> {
    type Node = Selection;

    fn construct(&self, ctx: &SyncContext<'_>) -> Result<Selection> {
        Ok(Selection::Field(Self::field_node(ctx, self.field)))
    }

    fn from_cached(&self, cached: &CachedNode) -> Result<Selection> {
        match cached {
            CachedNode::Selection(selection @ Selection::Field(_)) => Ok(selection.to_owned()),
            _ => Err(Diagnostic::InvariantViolation {
                path: self.path.to_owned(),
                detail: "the undo slot of a field holds a different kind of node".to_string(),
            }),
        }
    }

    fn into_cached(node: Selection) -> CachedNode {
        CachedNode::Selection(node)
    }

    fn matches(&self, node: &Selection) -> bool {
        matches!(node, Selection::Field(field_node) if field_node.name == self.field.name())
    }

    fn path(&self) -> &ExplorerPath {
        &self.path
    }
}

impl SelectionContainerSync for FieldSync<'_> {
    fn selection_set_mut(node: &mut Selection) -> Option<&mut SelectionSet> {
        match node {
            Selection::Field(field_node) => Some(&mut field_node.selection_set),
            _ => None,
        }
    }
}
