use crate::ast::operation::Argument;
use crate::ast::operation::Value;
use crate::explorer::CachedNode;
use crate::explorer::Diagnostic;
use crate::explorer::ExplorerPath;
use crate::explorer::sync::NodeSync;
use crate::explorer::sync::Spliced;
use crate::explorer::sync::SyncContext;
use crate::types::InputValueTrait;

type Result<T> = std::result::Result<T, Diagnostic>;

/// Synchronizes a field argument or an input-object field with the list of
/// `(name, value)` pairs that may hold it.
///
/// Arguments live in a field's argument list; input-object fields live in an
/// object literal, whose entries are handed to this synchronizer in key order
/// while they are being edited.
pub struct InputValueSync<'s> {
    input_value: &'s dyn InputValueTrait,
    path: ExplorerPath,
}
impl<'s> InputValueSync<'s> {
    /// Hand the entries of this value's object literal to `edit` and store
    /// what it returns. A value that is not an object literal (a variable,
    /// for instance) is reported and left alone.
    pub fn modify_child_fields<'a, F>(
        &self,
        ctx: &mut SyncContext<'a>,
        mut siblings: Vec<Argument>,
        target: &ExplorerPath,
        edit: F,
    ) -> Result<Spliced<Argument>>
    where
        F: FnOnce(&mut SyncContext<'a>, Vec<Argument>) -> Result<Spliced<Argument>>,
    {
        let idx = self.require_position(&siblings, target)?;
        let object_fields = match &mut siblings[idx].1 {
            Value::Object(object_fields) => object_fields,
            other => return Err(self.mismatch("an object literal", other)),
        };

        let child_fields = std::mem::take(object_fields).into_iter().collect();
        let spliced = edit(ctx, child_fields)?;
        *object_fields = spliced.nodes.into_iter().collect();

        Ok(Spliced {
            changed: spliced.changed,
            nodes: siblings,
        })
    }

    pub fn new(input_value: &'s dyn InputValueTrait, path: ExplorerPath) -> Self {
        Self { input_value, path }
    }

    /// Replace the entries of this value's object literal wholesale.
    pub fn set_child_fields(
        &self,
        mut siblings: Vec<Argument>,
        child_fields: Vec<Argument>,
    ) -> Result<Spliced<Argument>> {
        let idx = self.position(&siblings).ok_or_else(|| self.not_selected())?;
        let object_fields = match &mut siblings[idx].1 {
            Value::Object(object_fields) => object_fields,
            other => return Err(self.mismatch("an object literal", other)),
        };

        let replacement = child_fields.into_iter().collect();
        if *object_fields == replacement {
            return Ok(Spliced::unchanged(siblings));
        }
        *object_fields = replacement;
        Ok(Spliced::changed(siblings))
    }

    /// Re-encode `raw` as a literal of this value's leaf type. Variables,
    /// lists and object literals already in the document are never
    /// overwritten.
    pub fn set_value(
        &self,
        ctx: &mut SyncContext<'_>,
        mut siblings: Vec<Argument>,
        raw: &str,
    ) -> Result<Spliced<Argument>> {
        let idx = self.position(&siblings).ok_or_else(|| self.not_selected())?;

        let annot = self.input_value.type_annotation();
        if annot.is_list() {
            return Err(Diagnostic::ListTypedValue {
                path: self.path.to_owned(),
            });
        }
        let type_name = annot.innermost_type_name();
        let leaf_type = ctx.schema()
            .lookup_type(type_name)
            .ok_or_else(|| Diagnostic::UnknownType {
                type_name: type_name.to_string(),
            })?;
        if !leaf_type.is_leaf() {
            return Err(Diagnostic::NonLeafValue {
                type_name: type_name.to_string(),
            });
        }

        let current = &siblings[idx].1;
        if matches!(current, Value::List(_) | Value::Object(_) | Value::Variable(_)) {
            return Err(self.mismatch("a leaf literal", current));
        }

        let encoded = ctx.encoder().encode(leaf_type, raw)?;
        // A whole Float prints like an Int and re-parses as one.
        if encoded.to_string() == current.to_string() {
            return Ok(Spliced::unchanged(siblings));
        }

        log::debug!("Setting `{}` to `{encoded}`.", self.path);
        siblings[idx].1 = encoded;
        Ok(Spliced::changed(siblings))
    }

    fn mismatch(&self, expected: &'static str, found: &Value) -> Diagnostic {
        Diagnostic::ValueKindMismatch {
            expected,
            found: describe_value(found),
            path: self.path.to_owned(),
        }
    }

    fn not_selected(&self) -> Diagnostic {
        Diagnostic::NotSelected {
            path: self.path.to_owned(),
        }
    }
}

impl NodeSync for InputValueSync<'_> {
    type Node = Argument;

    fn construct(&self, ctx: &SyncContext<'_>) -> Result<Argument> {
        let value = ctx.generator().default_value_for(self.input_value)?;
        Ok((self.input_value.name().to_string(), value))
    }

    fn from_cached(&self, cached: &CachedNode) -> Result<Argument> {
        match cached {
            CachedNode::InputValue(argument) => Ok(argument.to_owned()),
            CachedNode::Selection(_) => Err(Diagnostic::InvariantViolation {
                path: self.path.to_owned(),
                detail: "the undo slot of an input value holds a selection".to_string(),
            }),
        }
    }

    fn into_cached(node: Argument) -> CachedNode {
        CachedNode::InputValue(node)
    }

    fn matches(&self, node: &Argument) -> bool {
        node.0 == self.input_value.name()
    }

    fn path(&self) -> &ExplorerPath {
        &self.path
    }
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Boolean(_) => "a Boolean literal".to_string(),
        Value::Enum(name) => format!("the enum value `{name}`"),
        Value::Float(_) => "a Float literal".to_string(),
        Value::Int(_) => "an Int literal".to_string(),
        Value::List(_) => "a list literal".to_string(),
        Value::Null => "null".to_string(),
        Value::Object(_) => "an object literal".to_string(),
        Value::String(_) => "a String literal".to_string(),
        Value::Variable(name) => format!("the variable `${name}`"),
    }
}
