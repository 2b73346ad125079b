use crate::defaults::DefaultArgumentPolicy;
use crate::defaults::DefaultSelectionPolicy;
use crate::defaults::HeuristicSelectionPolicy;
use crate::defaults::LiteralEncoder;
use crate::defaults::RequiredOnly;
use crate::defaults::ScalarCoercion;
use crate::plugins::ControlStyle;
use crate::plugins::InputControlPlugin;
use crate::plugins::InputControlRegistry;

/// The swappable policies of an [`Explorer`](crate::explorer::Explorer)
/// session.
///
/// ```
/// use libgraphql_explorer::defaults::ScalarCoercion;
/// use libgraphql_explorer::explorer::ExplorerConfig;
/// use libgraphql_explorer::schema::Schema;
/// use libgraphql_explorer::types::ObjectType;
///
/// let config = ExplorerConfig::new()
///     .with_scalar_coercion("Long", ScalarCoercion::Int)
///     .with_selection_policy(|_: &Schema, obj: &ObjectType| {
///         obj.fields().keys().take(1).cloned().collect::<Vec<_>>()
///     })
///     .with_input_controls(vec![], /* include_bundled = */ true);
/// assert_eq!(config.input_controls().plugin_names(), vec!["date"]);
/// ```
pub struct ExplorerConfig {
    argument_policy: Box<dyn DefaultArgumentPolicy>,
    control_style: ControlStyle,
    encoder: LiteralEncoder,
    input_controls: InputControlRegistry,
    selection_policy: Box<dyn DefaultSelectionPolicy>,
}
impl ExplorerConfig {
    pub fn argument_policy(&self) -> &dyn DefaultArgumentPolicy {
        self.argument_policy.as_ref()
    }

    pub fn control_style(&self) -> &ControlStyle {
        &self.control_style
    }

    pub fn encoder(&self) -> &LiteralEncoder {
        &self.encoder
    }

    pub fn input_controls(&self) -> &InputControlRegistry {
        &self.input_controls
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection_policy(&self) -> &dyn DefaultSelectionPolicy {
        self.selection_policy.as_ref()
    }

    pub fn with_argument_policy(
        mut self,
        policy: impl DefaultArgumentPolicy + 'static,
    ) -> Self {
        self.argument_policy = Box::new(policy);
        self
    }

    pub fn with_control_style(mut self, style: ControlStyle) -> Self {
        self.control_style = style;
        self
    }

    /// Replace the input-control plugins. Caller plugins are consulted first;
    /// with `include_bundled` the bundled plugins are appended after them.
    pub fn with_input_controls(
        mut self,
        plugins: Vec<Box<dyn InputControlPlugin>>,
        include_bundled: bool,
    ) -> Self {
        self.input_controls = InputControlRegistry::new(plugins, include_bundled);
        self
    }

    pub fn with_scalar_coercion(
        mut self,
        scalar_name: impl Into<String>,
        coercion: ScalarCoercion,
    ) -> Self {
        self.encoder = self.encoder.with_scalar_coercion(scalar_name, coercion);
        self
    }

    pub fn with_selection_policy(
        mut self,
        policy: impl DefaultSelectionPolicy + 'static,
    ) -> Self {
        self.selection_policy = Box::new(policy);
        self
    }
}
impl std::default::Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            argument_policy: Box::new(RequiredOnly),
            control_style: ControlStyle::default(),
            encoder: LiteralEncoder::new(),
            input_controls: InputControlRegistry::new(vec![], false),
            selection_policy: Box::new(HeuristicSelectionPolicy),
        }
    }
}
