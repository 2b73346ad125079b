use crate::plugins::ControlStyle;
use crate::plugins::ControlTarget;
use crate::plugins::DateInputPlugin;
use crate::plugins::InputControlPlugin;
use crate::plugins::RenderedControl;

/// An ordered list of [`InputControlPlugin`]s. The first plugin that can
/// handle a target renders it.
pub struct InputControlRegistry {
    plugins: Vec<Box<dyn InputControlPlugin>>,
}
impl InputControlRegistry {
    /// `include_bundled` appends the bundled plugins ([`DateInputPlugin`])
    /// after `plugins`, so caller-supplied plugins always take precedence.
    pub fn new(mut plugins: Vec<Box<dyn InputControlPlugin>>, include_bundled: bool) -> Self {
        if include_bundled {
            plugins.push(Box::new(DateInputPlugin));
        }
        Self { plugins }
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|plugin| plugin.name()).collect()
    }

    pub fn process(
        &self,
        target: &ControlTarget<'_>,
        style: &ControlStyle,
    ) -> Option<RenderedControl> {
        let plugin = self.plugins.iter().find(|plugin| plugin.can_handle(target))?;
        log::trace!("Rendering `{}` with the `{}` plugin.", target.path, plugin.name());

        let mut control = plugin.render(target, style);
        control.plugin = Some(plugin.name().to_string());
        Some(control)
    }
}
