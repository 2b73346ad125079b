use crate::types::InputValueTrait;

/// Decides whether an *optional* parameter or input field is pre-filled when
/// its field (or input object) is added. Required ones are always pre-filled.
pub trait DefaultArgumentPolicy {
    fn include_optional(&self, parent_name: &str, input_value: &dyn InputValueTrait) -> bool;
}

/// Only required parameters and input fields get default values.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequiredOnly;

impl DefaultArgumentPolicy for RequiredOnly {
    fn include_optional(&self, _parent_name: &str, _input_value: &dyn InputValueTrait) -> bool {
        false
    }
}

impl<F> DefaultArgumentPolicy for F
where
    F: Fn(&str, &dyn InputValueTrait) -> bool,
{
    fn include_optional(&self, parent_name: &str, input_value: &dyn InputValueTrait) -> bool {
        self(parent_name, input_value)
    }
}
