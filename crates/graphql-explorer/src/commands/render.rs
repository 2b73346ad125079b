use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::SessionArgs;
use crate::output_utils;
use libgraphql_explorer::explorer::Explorer;
use libgraphql_explorer::operation::OperationKind;

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[command(flatten)]
    session: SessionArgs,

    #[arg(
        default_value="query",
        help="Which operation to render: `query`, `mutation` or \
             `subscription`.",
        long,
        short='k',
    )]
    kind: OperationKind,

    #[arg(
        help="Only print selected entities.",
        long,
    )]
    selected_only: bool,
}

#[inherent::inherent]
impl RunnableCommand for RenderCmd {
    pub fn run(self, _cli: Cli) -> CommandResult {
        let schema = match self.session.load_schema() {
            Ok(schema) => schema,
            Err(err) => return err.into(),
        };
        let text = match self.session.read_document() {
            Ok(text) => text,
            Err(err) => return err.into(),
        };

        let mut explorer = Explorer::new(&schema, self.session.config(), |_: String| ());
        explorer.set_text(text);

        match explorer.tree(self.kind) {
            Some(tree) => CommandResult::stdout(format_args!(
                "{}",
                output_utils::format_tree(&tree, self.selected_only),
            )),
            None => CommandResult::stderr(format_args!(
                "{} The schema defines no {} root operation type.",
                output_utils::RED_X,
                self.kind,
            )),
        }
    }
}
