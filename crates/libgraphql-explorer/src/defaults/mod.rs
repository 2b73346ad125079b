//! Default values and default selections used when an entity is added
//! without any prior user input.

mod argument_policy;
mod default_value_generator;
mod literal_encoder;
mod selection_policy;

pub use argument_policy::DefaultArgumentPolicy;
pub use argument_policy::RequiredOnly;
pub use default_value_generator::DefaultValueGenerator;
pub use literal_encoder::LiteralEncoder;
pub use literal_encoder::ScalarCoercion;
pub use selection_policy::DefaultSelectionPolicy;
pub use selection_policy::HeuristicSelectionPolicy;
pub(crate) use selection_policy::is_leaf_field;

#[cfg(test)]
mod tests;
