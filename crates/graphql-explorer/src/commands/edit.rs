use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::SessionArgs;
use crate::output_utils;
use libgraphql_explorer::explorer::EditOutcome;
use libgraphql_explorer::explorer::Explorer;
use libgraphql_explorer::explorer::ExplorerPath;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, clap::Args)]
pub(crate) struct AddCmd {
    #[command(flatten)]
    session: SessionArgs,

    #[arg(
        help="Also select every leaf-typed subfield of the added field.",
        long,
    )]
    leaf_subfields: bool,

    #[arg(
        help="The entity to select, e.g. `query/user/arg:id` or \
             `query/node/on:User/name`.",
        name="PATH",
    )]
    path: ExplorerPath,
}

#[inherent::inherent]
impl RunnableCommand for AddCmd {
    pub fn run(self, _cli: Cli) -> CommandResult {
        let leaf_subfields = self.leaf_subfields;
        run_edit(&self.session, &self.path, |explorer, path| {
            if leaf_subfields {
                explorer.add_with_leaf_subfields(path)
            } else {
                explorer.add(path)
            }
        })
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct RemoveCmd {
    #[command(flatten)]
    session: SessionArgs,

    #[arg(help="The entity to deselect.", name="PATH")]
    path: ExplorerPath,
}

#[inherent::inherent]
impl RunnableCommand for RemoveCmd {
    pub fn run(self, _cli: Cli) -> CommandResult {
        run_edit(&self.session, &self.path, |explorer, path| explorer.remove(path))
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct SetCmd {
    #[command(flatten)]
    session: SessionArgs,

    #[arg(help="The argument or input field to set.", name="PATH")]
    path: ExplorerPath,

    #[arg(
        help="The raw value. It is encoded according to the declared type \
             (e.g. `42` for an Int, `ADMIN` for an enum).",
        name="VALUE",
    )]
    value: String,
}

#[inherent::inherent]
impl RunnableCommand for SetCmd {
    pub fn run(self, _cli: Cli) -> CommandResult {
        run_edit(&self.session, &self.path, |explorer, path| {
            explorer.set_value(path, &self.value)
        })
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct ToggleCmd {
    #[command(flatten)]
    session: SessionArgs,

    #[arg(help="The entity to select or deselect.", name="PATH")]
    path: ExplorerPath,
}

#[inherent::inherent]
impl RunnableCommand for ToggleCmd {
    pub fn run(self, _cli: Cli) -> CommandResult {
        run_edit(&self.session, &self.path, |explorer, path| explorer.toggle(path))
    }
}

/// Load the session, apply one edit and either print the new document or
/// write it back to `--document`.
fn run_edit<F>(session: &SessionArgs, path: &ExplorerPath, edit: F) -> CommandResult
where
    F: FnOnce(&mut Explorer<'_>, &ExplorerPath) -> EditOutcome,
{
    let schema = match session.load_schema() {
        Ok(schema) => schema,
        Err(err) => return err.into(),
    };
    let text = match session.read_document() {
        Ok(text) => text,
        Err(err) => return err.into(),
    };

    let emitted: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let sink = {
        let emitted = Rc::clone(&emitted);
        move |new_text: String| {
            *emitted.borrow_mut() = Some(new_text);
        }
    };

    let mut explorer = Explorer::new(&schema, session.config(), sink);
    explorer.set_text(text);

    let outcome = edit(&mut explorer, path);
    let new_text = emitted.borrow_mut().take();
    match (outcome, new_text) {
        (EditOutcome::Applied, Some(new_text)) => {
            if !session.write {
                return CommandResult::stdout(format_args!("{new_text}"));
            }

            match session.write_document(&new_text) {
                Ok(()) => CommandResult::stdout(format_args!(
                    "{} Updated {:#?}.",
                    output_utils::GREEN_CHECK,
                    session.document,
                )),
                Err(err) => err.into(),
            }
        },

        (EditOutcome::Rejected(diag), _) => CommandResult::stderr(format_args!(
            "{} {diag}",
            output_utils::RED_X,
        )),

        (_, _) => {
            log::info!("`{path}` needed no change.");
            if session.write {
                CommandResult::stdout(format_args!(
                    "{} {:#?} is already up to date.",
                    output_utils::GREEN_CHECK,
                    session.document,
                ))
            } else {
                CommandResult::stdout(format_args!("{}", explorer.text()))
            }
        },
    }
}
