use crate::ast::operation::Argument;
use crate::ast::operation::Selection;
use crate::explorer::Diagnostic;
use crate::explorer::ExplorerPath;
use crate::explorer::PathSegment;
use crate::explorer::sync::FieldAddMode;
use crate::explorer::sync::FieldSync;
use crate::explorer::sync::FragmentSync;
use crate::explorer::sync::InputValueSync;
use crate::explorer::sync::NodeSync;
use crate::explorer::sync::SelectionContainerSync;
use crate::explorer::sync::Spliced;
use crate::explorer::sync::SyncContext;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValueTrait;

type Result<T> = std::result::Result<T, Diagnostic>;

/// What to do with the entity at the end of an [`ExplorerPath`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum EditAction<'r> {
    Add(FieldAddMode),
    Remove,
    SetValue(&'r str),
}

/// Apply `action` to the entity addressed by `path`, starting from the
/// top-level selections of its operation.
///
/// Each level of the path resolves its schema entity, builds the matching
/// synchronizer, and either performs the action (last segment) or hands its
/// nested list to the next level and splices the result back in.
pub(crate) fn edit_operation<'a>(
    ctx: &mut SyncContext<'a>,
    root_type: &'a GraphQLType,
    path: &ExplorerPath,
    selections: Vec<Selection>,
    action: EditAction<'_>,
) -> Result<Spliced<Selection>> {
    edit_selections(ctx, root_type, path, 0, selections, action)
}

fn edit_selections<'a>(
    ctx: &mut SyncContext<'a>,
    parent_type: &'a GraphQLType,
    path: &ExplorerPath,
    depth: usize,
    selections: Vec<Selection>,
    action: EditAction<'_>,
) -> Result<Spliced<Selection>> {
    let schema = ctx.schema();
    let is_target = depth + 1 == path.depth();

    match &path.segments()[depth] {
        PathSegment::Field(field_name) => {
            let field = parent_type.fields()
                .and_then(|fields| fields.get(field_name))
                .ok_or_else(|| Diagnostic::UnknownField {
                    field_name: field_name.to_string(),
                    type_name: parent_type.name().to_string(),
                })?;
            let sync = FieldSync::new(field, path.prefix(depth + 1));

            if is_target {
                return match action {
                    EditAction::Add(FieldAddMode::Bare) => sync.add(ctx, selections),
                    EditAction::Add(FieldAddMode::WithLeafSubfields) =>
                        sync.add_with_leaf_subfields(ctx, selections),
                    EditAction::Remove => sync.remove(ctx, selections),
                    EditAction::SetValue(_) => Err(not_a_value(path)),
                };
            }

            if let PathSegment::Argument(_) = &path.segments()[depth + 1] {
                return sync.modify_arguments(ctx, selections, path, |ctx, arguments| {
                    edit_arguments(ctx, InputSlots::Parameters(field), path, depth + 1, arguments, action)
                });
            }

            let child_type_name = field.type_annotation().innermost_type_name();
            let child_type = schema.lookup_type(child_type_name)
                .ok_or_else(|| Diagnostic::UnknownType {
                    type_name: child_type_name.to_string(),
                })?;
            sync.modify_selections(ctx, selections, path, |ctx, nested| {
                edit_selections(ctx, child_type, path, depth + 1, nested, action)
            })
        },

        PathSegment::Fragment(type_name) => {
            let object_type = schema.possible_types(parent_type.name())
                .into_iter()
                .find(|possible_type| possible_type.name() == type_name)
                .ok_or_else(|| Diagnostic::UnknownFragmentType {
                    abstract_type_name: parent_type.name().to_string(),
                    type_name: type_name.to_string(),
                })?;
            let sync = FragmentSync::new(object_type, path.prefix(depth + 1));

            if is_target {
                return match action {
                    EditAction::Add(_) => sync.add(ctx, selections),
                    EditAction::Remove => sync.remove(ctx, selections),
                    EditAction::SetValue(_) => Err(not_a_value(path)),
                };
            }

            let fragment_type = schema.lookup_type(type_name)
                .ok_or_else(|| Diagnostic::UnknownType {
                    type_name: type_name.to_string(),
                })?;
            sync.modify_selections(ctx, selections, path, |ctx, nested| {
                edit_selections(ctx, fragment_type, path, depth + 1, nested, action)
            })
        },

        PathSegment::Argument(_) | PathSegment::InputField(_) => Err(Diagnostic::InvariantViolation {
            path: path.to_owned(),
            detail: "an input value segment was dispatched against a selection list".to_string(),
        }),
    }
}

/// The declared slots of whatever holds an argument list: a field's
/// parameters, or an input object's fields.
#[derive(Clone, Copy)]
enum InputSlots<'a> {
    InputFields(&'a InputObjectType),
    Parameters(&'a Field),
}
impl<'a> InputSlots<'a> {
    fn lookup(&self, name: &str) -> Result<&'a dyn InputValueTrait> {
        match self {
            Self::InputFields(input_object) => input_object.fields()
                .get(name)
                .map(|input_field| input_field as &dyn InputValueTrait)
                .ok_or_else(|| Diagnostic::UnknownInputField {
                    field_name: name.to_string(),
                    type_name: input_object.name().to_string(),
                }),

            Self::Parameters(field) => field.parameters()
                .get(name)
                .map(|param| param as &dyn InputValueTrait)
                .ok_or_else(|| Diagnostic::UnknownArgument {
                    argument_name: name.to_string(),
                    type_name: format!("{}.{}", field.parent_type_name(), field.name()),
                }),
        }
    }
}

fn edit_arguments<'a>(
    ctx: &mut SyncContext<'a>,
    slots: InputSlots<'a>,
    path: &ExplorerPath,
    depth: usize,
    arguments: Vec<Argument>,
    action: EditAction<'_>,
) -> Result<Spliced<Argument>> {
    let input_value = slots.lookup(path.segments()[depth].name())?;
    let sync = InputValueSync::new(input_value, path.prefix(depth + 1));

    if depth + 1 == path.depth() {
        return match action {
            EditAction::Add(_) => sync.add(ctx, arguments),
            EditAction::Remove => sync.remove(ctx, arguments),
            EditAction::SetValue(raw) => sync.set_value(ctx, arguments, raw),
        };
    }

    let annot = input_value.type_annotation();
    if annot.is_list() {
        return Err(Diagnostic::ListTypedValue {
            path: sync.path().to_owned(),
        });
    }
    let input_object = ctx.schema()
        .lookup_type(annot.innermost_type_name())
        .and_then(|type_| type_.as_input_object())
        .ok_or_else(|| Diagnostic::UnknownInputField {
            field_name: path.segments()[depth + 1].name().to_string(),
            type_name: annot.innermost_type_name().to_string(),
        })?;

    sync.modify_child_fields(ctx, arguments, path, |ctx, child_fields| {
        edit_arguments(ctx, InputSlots::InputFields(input_object), path, depth + 1, child_fields, action)
    })
}

fn not_a_value(path: &ExplorerPath) -> Diagnostic {
    Diagnostic::InvalidPath {
        path: path.to_string(),
        reason: "only arguments and input fields hold values".to_string(),
    }
}
