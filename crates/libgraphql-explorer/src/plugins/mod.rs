//! Pluggable renderers for the value editors of leaf arguments.
//!
//! Plugins are consulted in order and the first one whose
//! [`InputControlPlugin::can_handle`] accepts an argument renders its control.
//! When none does, the explorer tree falls back to its built-in controls.

mod control_target;
mod date_input_plugin;
mod input_control_plugin;
mod input_control_registry;
mod rendered_control;

pub use control_target::ControlTarget;
pub use date_input_plugin::DateInputPlugin;
pub use input_control_plugin::InputControlPlugin;
pub use input_control_registry::InputControlRegistry;
pub use rendered_control::ControlStyle;
pub use rendered_control::InputKind;
pub use rendered_control::RenderedControl;
