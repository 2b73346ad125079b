use crate::plugins::ControlStyle;
use crate::plugins::ControlTarget;
use crate::plugins::RenderedControl;

pub trait InputControlPlugin {
    fn can_handle(&self, target: &ControlTarget<'_>) -> bool;

    fn name(&self) -> &str;

    fn render(&self, target: &ControlTarget<'_>, style: &ControlStyle) -> RenderedControl;
}
