use crate::ast;
use crate::ast::operation::Definition;
use crate::ast::operation::Document;
use crate::ast::operation::OperationDefinition;
use crate::ast::operation::Selection;
use crate::ast::operation::SelectionSet;
use crate::document;
use crate::operation::OperationKind;
use std::borrow::Cow;
use std::collections::HashMap;

/// The last operation definition of each kind that was dropped from the
/// document because its selection set became empty.
///
/// Re-adding a first selection to that kind of operation restores the
/// remembered definition (name, variables, directives) instead of starting
/// from a blank one.
#[derive(Clone, Debug, Default)]
pub struct PreviousOperations {
    by_kind: HashMap<OperationKind, OperationDefinition>,
}
impl PreviousOperations {
    pub fn get(&self, kind: OperationKind) -> Option<&OperationDefinition> {
        self.by_kind.get(&kind)
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn remember(&mut self, kind: OperationKind, op_def: OperationDefinition) {
        self.by_kind.insert(kind, op_def);
    }
}

/// Locates (or synthesizes) the single operation definition of a given kind
/// that the explorer manages, and writes edited selections back into the
/// document. Every other definition passes through untouched.
pub struct OperationResolver;
impl OperationResolver {
    /// Splice `new_selections` into the operation of the given kind and
    /// serialize the resulting document.
    ///
    /// An operation left with no selections is dropped from the document (and
    /// remembered in `previous`) rather than serialized empty. A new operation
    /// is prepended to the definition list.
    pub fn commit(
        mut document: Document,
        kind: OperationKind,
        new_selections: Vec<Selection>,
        previous: &mut PreviousOperations,
    ) -> String {
        let located_idx = Self::position(&document, kind);

        if new_selections.is_empty() {
            if let Some(idx) = located_idx
                && let Definition::Operation(op_def) = document.definitions.remove(idx) {
                log::debug!("Dropping the {kind} operation: its selection set is empty.");
                previous.remember(kind, op_def);
            }
            return document::serialize(&document);
        }

        let located = match located_idx {
            Some(idx) => match &document.definitions[idx] {
                Definition::Operation(op_def) => op_def.to_owned(),
                Definition::Fragment(_) => Self::synthesize(kind),
            },
            None => Self::synthesize(kind),
        };

        let mut target =
            if selection_set(&located).items.is_empty()
                && let Some(previous_def) = previous.get(kind) {
                log::debug!("Restoring the previously dropped {kind} operation.");
                previous_def.to_owned()
            } else {
                located
            };
        selection_set_mut(&mut target).items = new_selections;

        match located_idx {
            Some(idx) => document.definitions[idx] = Definition::Operation(target),
            None => document.definitions.insert(0, Definition::Operation(target)),
        }

        document::serialize(&document)
    }

    /// The first operation definition of the given kind, if the document has
    /// one.
    pub fn find(document: &Document, kind: OperationKind) -> Option<&OperationDefinition> {
        document.definitions
            .iter()
            .find_map(|def| match def {
                Definition::Operation(op_def)
                    if OperationKind::of_definition(op_def) == kind => Some(op_def),
                _ => None,
            })
    }

    /// Returns the first operation definition of the given kind, or a
    /// synthesized empty one. A synthesized definition is *not* inserted into
    /// the document.
    pub fn locate(document: &Document, kind: OperationKind) -> Cow<'_, OperationDefinition> {
        Self::find(document, kind)
            .map(Cow::Borrowed)
            .unwrap_or_else(|| Cow::Owned(Self::synthesize(kind)))
    }

    fn position(document: &Document, kind: OperationKind) -> Option<usize> {
        document.definitions
            .iter()
            .position(|def| matches!(
                def,
                Definition::Operation(op_def) if OperationKind::of_definition(op_def) == kind
            ))
    }

    fn synthesize(kind: OperationKind) -> OperationDefinition {
        let position = ast::operation::SYNTHETIC_POS;
        let selection_set = ast::operation::empty_selection_set();
        match kind {
            OperationKind::Mutation => OperationDefinition::Mutation(ast::operation::Mutation {
                position,
                name: None,
                variable_definitions: vec![],
                directives: vec![],
                selection_set,
            }),
            OperationKind::Query => OperationDefinition::Query(ast::operation::Query {
                position,
                name: None,
                variable_definitions: vec![],
                directives: vec![],
                selection_set,
            }),
            OperationKind::Subscription => OperationDefinition::Subscription(ast::operation::Subscription {
                position,
                name: None,
                variable_definitions: vec![],
                directives: vec![],
                selection_set,
            }),
        }
    }
}

/// The top-level selection set of an operation definition.
pub fn selection_set(op_def: &OperationDefinition) -> &SelectionSet {
    match op_def {
        OperationDefinition::Mutation(mutation) => &mutation.selection_set,
        OperationDefinition::Query(query) => &query.selection_set,
        OperationDefinition::SelectionSet(selection_set) => selection_set,
        OperationDefinition::Subscription(subscription) => &subscription.selection_set,
    }
}

fn selection_set_mut(op_def: &mut OperationDefinition) -> &mut SelectionSet {
    match op_def {
        OperationDefinition::Mutation(mutation) => &mut mutation.selection_set,
        OperationDefinition::Query(query) => &mut query.selection_set,
        OperationDefinition::SelectionSet(selection_set) => selection_set,
        OperationDefinition::Subscription(subscription) => &mut subscription.selection_set,
    }
}
