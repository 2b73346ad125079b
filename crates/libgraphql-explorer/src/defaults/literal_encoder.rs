use crate::ast::operation::Number;
use crate::ast::operation::Value;
use crate::explorer::Diagnostic;
use crate::types::EnumType;
use crate::types::GraphQLType;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Diagnostic>;

/// How raw input for a scalar is turned into a literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ScalarCoercion {
    Boolean,
    Float,
    Int,
    String,
}
impl ScalarCoercion {
    fn seed_literal(&self) -> Value {
        match self {
            Self::Boolean => Value::Boolean(false),
            Self::Float => Value::Float(1.5),
            Self::Int => Value::Int(Number::from(10)),
            Self::String => Value::String(String::new()),
        }
    }
}

/// Turns raw user input into typed literals for leaf (scalar and enum) types.
///
/// Encoding never fails on bad input: numbers that do not parse become string
/// literals holding the raw text, anything other than `true` becomes `false`
/// for Booleans, and unknown enum values fall back to the enum's first
/// declared value. Custom scalars are string-like unless a
/// [`ScalarCoercion`] is registered for their name.
#[derive(Clone, Debug, Default)]
pub struct LiteralEncoder {
    custom_scalars: HashMap<String, ScalarCoercion>,
}
impl LiteralEncoder {
    /// The canonical seed literal for a leaf type, used when an argument or
    /// input field is first added.
    pub fn default_literal(&self, leaf_type: &GraphQLType) -> Result<Value> {
        if let GraphQLType::Enum(enum_type) = leaf_type {
            return first_enum_value(enum_type);
        }

        match self.coercion_for(leaf_type)? {
            // ID and string-like custom scalars
            None => Ok(Value::String(String::new())),
            Some(coercion) => Ok(coercion.seed_literal()),
        }
    }

    pub fn encode(&self, leaf_type: &GraphQLType, raw: &str) -> Result<Value> {
        if let GraphQLType::Enum(enum_type) = leaf_type {
            let trimmed = raw.trim();
            return match enum_type.value(trimmed) {
                Some(value) if !trimmed.is_empty() => Ok(Value::Enum(value.name().to_string())),
                _ => {
                    log::debug!(
                        "`{raw}` is not a value of the `{}` enum; falling back \
                        to its first declared value.",
                        enum_type.name(),
                    );
                    first_enum_value(enum_type)
                },
            };
        }

        Ok(match self.coercion_for(leaf_type)? {
            Some(ScalarCoercion::Boolean) => match raw.trim() {
                "true" => Value::Boolean(true),
                _ => Value::Boolean(false),
            },

            Some(ScalarCoercion::Float) => match raw.trim().parse::<f64>() {
                Ok(num) if num.is_finite() && prints_as_number(num) => Value::Float(num),
                _ => Value::String(raw.to_string()),
            },

            Some(ScalarCoercion::Int) => match raw.trim().parse::<i32>() {
                Ok(num) => Value::Int(Number::from(num)),
                _ => Value::String(raw.to_string()),
            },

            Some(ScalarCoercion::String) | None => Value::String(raw.to_string()),
        })
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// The coercion registered for a custom scalar, if any.
    pub fn scalar_coercion(&self, scalar_name: &str) -> Option<ScalarCoercion> {
        self.custom_scalars.get(scalar_name).copied()
    }

    /// Make the named custom scalar parse like one of the built-in scalars.
    pub fn with_scalar_coercion(
        mut self,
        scalar_name: impl Into<String>,
        coercion: ScalarCoercion,
    ) -> Self {
        self.custom_scalars.insert(scalar_name.into(), coercion);
        self
    }

    /// `Ok(None)` means "treat as a string without a coercion of its own"
    /// (`ID` and unregistered custom scalars).
    fn coercion_for(&self, leaf_type: &GraphQLType) -> Result<Option<ScalarCoercion>> {
        Ok(match leaf_type {
            GraphQLType::Bool => Some(ScalarCoercion::Boolean),
            GraphQLType::Float => Some(ScalarCoercion::Float),
            GraphQLType::Int => Some(ScalarCoercion::Int),
            GraphQLType::String => Some(ScalarCoercion::String),
            GraphQLType::ID => None,
            GraphQLType::Scalar(scalar_type) =>
                self.scalar_coercion(scalar_type.name()),
            non_leaf => return Err(Diagnostic::NonLeafValue {
                type_name: non_leaf.name().to_string(),
            }),
        })
    }
}

/// Floats print without an exponent, so whole values come back as Int
/// tokens and must fit the parser's `i64`.
fn prints_as_number(num: f64) -> bool {
    let printed = num.to_string();
    printed.contains('.') || printed.parse::<i64>().is_ok()
}

fn first_enum_value(enum_type: &EnumType) -> Result<Value> {
    enum_type.first_value()
        .map(|value| Value::Enum(value.name().to_string()))
        .ok_or_else(|| Diagnostic::EnumWithoutValues {
            type_name: enum_type.name().to_string(),
        })
}
