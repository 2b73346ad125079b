use crate::types::TypeAnnotation;

/// Shared shape of [`Parameter`](crate::types::Parameter)s and
/// [`InputField`](crate::types::InputField)s: a named slot whose value is
/// written as a literal in an operation document.
pub trait InputValueTrait {
    /// The default value declared in the schema, rendered as a GraphQL literal.
    fn default_value(&self) -> Option<&str>;

    /// Whether a value must be supplied: the annotation is non-null and the
    /// schema declares no default.
    fn is_required(&self) -> bool {
        !self.type_annotation().nullable() && self.default_value().is_none()
    }

    fn name(&self) -> &str;

    fn type_annotation(&self) -> &TypeAnnotation;
}
