use crate::explorer::ExplorerPath;
use crate::plugins::ControlTarget;

/// Presentation hints handed through to every rendered control.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ControlStyle {
    pub compact: bool,
    pub placeholder: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum InputKind {
    Checkbox,
    Date,
    Number,
    Select {
        options: Vec<String>,
    },
    Text,
}

/// A headless description of a value editor.
///
/// Change events belong at `on_change`: the host passes that path and the
/// raw text the user entered to
/// [`Explorer::set_value`](crate::explorer::Explorer::set_value).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RenderedControl {
    pub input_kind: InputKind,
    pub label: String,
    pub on_change: ExplorerPath,
    /// The plugin that rendered this control, or `None` for a built-in one.
    pub plugin: Option<String>,
    pub style: ControlStyle,
    pub value: String,
}
impl RenderedControl {
    pub fn new(target: &ControlTarget<'_>, input_kind: InputKind, style: &ControlStyle) -> Self {
        Self {
            input_kind,
            label: target.input_value.name().to_string(),
            on_change: target.path.to_owned(),
            plugin: None,
            style: style.to_owned(),
            value: target.raw_value(),
        }
    }
}
