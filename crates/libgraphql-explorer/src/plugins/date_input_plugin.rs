use crate::plugins::ControlStyle;
use crate::plugins::ControlTarget;
use crate::plugins::InputControlPlugin;
use crate::plugins::InputKind;
use crate::plugins::RenderedControl;
use inherent::inherent;

/// Renders a date picker for values of a custom scalar named `Date`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DateInputPlugin;

#[inherent]
impl InputControlPlugin for DateInputPlugin {
    pub fn can_handle(&self, target: &ControlTarget<'_>) -> bool {
        target.leaf_type.name() == "Date"
    }

    pub fn name(&self) -> &str {
        "date"
    }

    pub fn render(&self, target: &ControlTarget<'_>, style: &ControlStyle) -> RenderedControl {
        RenderedControl::new(target, InputKind::Date, style)
    }
}
