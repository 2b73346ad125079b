use crate::ast::operation::Document;
use crate::ast::operation::Field;
use crate::ast::operation::InlineFragment;
use crate::ast::operation::Selection;
use crate::ast::operation::TypeCondition;
use crate::ast::operation::Value;
use crate::explorer::ExplorerPath;
use crate::explorer::PathSegment;
use crate::operation;
use crate::operation::OperationResolver;

/// A document node addressed by an [`ExplorerPath`].
#[derive(Clone, Copy, Debug)]
pub(crate) enum FoundNode<'d> {
    Field(&'d Field),
    Fragment(&'d InlineFragment),
    InputValue(&'d Value),
}

/// Follow `path` through `document` using the same identity rules as the
/// synchronizers. Returns `None` as soon as a segment is not present.
pub(crate) fn lookup<'d>(document: &'d Document, path: &ExplorerPath) -> Option<FoundNode<'d>> {
    let op_def = OperationResolver::find(document, path.kind())?;
    let mut found: Option<FoundNode<'d>> = None;

    for segment in path.segments() {
        let selections = match found {
            None => Some(operation::selection_set(op_def).items.as_slice()),
            Some(FoundNode::Field(field)) => Some(field.selection_set.items.as_slice()),
            Some(FoundNode::Fragment(fragment)) => Some(fragment.selection_set.items.as_slice()),
            Some(FoundNode::InputValue(_)) => None,
        };

        let next = match (segment, found) {
            (PathSegment::Field(name), _) => selections?.iter().find_map(|selection| match selection {
                Selection::Field(field) if &field.name == name => Some(FoundNode::Field(field)),
                _ => None,
            }),

            (PathSegment::Fragment(type_name), Some(FoundNode::Field(_))) =>
                selections?.iter().find_map(|selection| match selection {
                    Selection::InlineFragment(fragment) if matches!(
                        &fragment.type_condition,
                        Some(TypeCondition::On(on_type)) if on_type == type_name
                    ) => Some(FoundNode::Fragment(fragment)),
                    _ => None,
                }),

            (PathSegment::Argument(name), Some(FoundNode::Field(field))) =>
                field.arguments
                    .iter()
                    .find(|(arg_name, _)| arg_name == name)
                    .map(|(_, value)| FoundNode::InputValue(value)),

            (PathSegment::InputField(name), Some(FoundNode::InputValue(Value::Object(fields)))) =>
                fields.get(name).map(FoundNode::InputValue),

            _ => None,
        };
        found = Some(next?);
    }

    found
}
