mod edit;
mod render;
mod session_args;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use edit::AddCmd;
use edit::RemoveCmd;
use edit::SetCmd;
use edit::ToggleCmd;
use render::RenderCmd;
use session_args::SessionArgs;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-explorer")]
pub(crate) enum CommandEnum {
    /// Select a field, fragment, argument or input field.
    Add(Box<AddCmd>),

    /// Deselect a field, fragment, argument or input field.
    Remove(Box<RemoveCmd>),

    /// Print the explorer tree of one operation.
    Render(Box<RenderCmd>),

    /// Set the value of a selected argument or input field.
    Set(Box<SetCmd>),

    /// Select the entity if it is absent, deselect it otherwise.
    Toggle(Box<ToggleCmd>),
}
impl CommandEnum {
    pub(crate) fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Add(cmd) => cmd.run(cli),
            Self::Remove(cmd) => cmd.run(cli),
            Self::Render(cmd) => cmd.run(cli),
            Self::Set(cmd) => cmd.run(cli),
            Self::Toggle(cmd) => cmd.run(cli),
        }
    }
}
