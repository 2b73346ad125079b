use anyhow::Context;
use libgraphql_explorer::defaults::ScalarCoercion;
use libgraphql_explorer::explorer::ExplorerConfig;
use libgraphql_explorer::schema::Schema;
use libgraphql_explorer::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Where the schema and the document live, shared by every subcommand.
#[derive(Debug, clap::Args)]
pub(crate) struct SessionArgs {
    #[arg(
        help="The operation document to edit. A missing file is treated as an \
             empty document.",
        long,
        short='d',
    )]
    pub document: PathBuf,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Render values of `Date` arguments with the bundled date input.",
        long,
    )]
    bundled_controls: bool,

    #[arg(
        help="Treat a custom scalar like a built-in one when encoding values, \
             e.g. `Long=Int`. May be repeated.",
        long="scalar",
        value_name="NAME=Int|Float|Boolean|String",
        value_parser=parse_scalar_coercion,
    )]
    scalar_coercions: Vec<(String, ScalarCoercion)>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        long,
        required=true,
        short='s',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Write the edited document back to --document instead of \
             printing it.",
        long,
        short='w',
    )]
    pub write: bool,
}
impl SessionArgs {
    pub fn config(&self) -> ExplorerConfig {
        self.scalar_coercions
            .iter()
            .fold(ExplorerConfig::new(), |config, (scalar_name, coercion)| {
                config.with_scalar_coercion(scalar_name, *coercion)
            })
            .with_input_controls(vec![], self.bundled_controls)
    }

    pub fn load_schema(&self) -> anyhow::Result<Schema> {
        let file_paths = self.schema_file_paths()?;
        log::debug!("Loading the schema from {} files.", file_paths.len());
        let schema = SchemaBuilder::new()
            .load_files(file_paths)?
            .build()?;
        Ok(schema)
    }

    pub fn read_document(&self) -> anyhow::Result<String> {
        if !self.document.exists() {
            log::info!(
                "{:#?} does not exist yet; starting from an empty document.",
                self.document,
            );
            return Ok(String::new());
        }

        std::fs::read_to_string(&self.document)
            .with_context(|| format!("Failed to read the document at {:#?}", self.document))
    }

    pub fn write_document(&self, text: &str) -> anyhow::Result<()> {
        std::fs::write(&self.document, text)
            .with_context(|| format!("Failed to write the document to {:#?}", self.document))
    }

    /// Every schema file at or under the `--schema` paths.
    fn schema_file_paths(&self) -> anyhow::Result<Vec<PathBuf>> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        let mut file_paths = vec![];
        for path in &self.schema {
            // A file named explicitly is loaded whatever its extension.
            if path.is_file() {
                file_paths.push(path.to_owned());
                continue;
            }

            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "Failed to scan schema files at/under {path:#?}",
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                if let Some(ext) = entry_path.extension().map(|s| s.to_string_lossy())
                    && graphql_file_exts.contains(&*ext) {
                    log::trace!("Found schema file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        if file_paths.is_empty() {
            anyhow::bail!(
                "No schema files found under {:?} (extensions: {}).",
                self.schema,
                self.graphql_file_exts.join(", "),
            );
        }
        Ok(file_paths)
    }
}

fn parse_scalar_coercion(arg: &str) -> Result<(String, ScalarCoercion), String> {
    let Some((scalar_name, coercion)) = arg.split_once('=') else {
        return Err(format!("expected `NAME=COERCION`, got `{arg}`"));
    };

    let coercion = match coercion.trim() {
        "Boolean" => ScalarCoercion::Boolean,
        "Float" => ScalarCoercion::Float,
        "Int" => ScalarCoercion::Int,
        "String" => ScalarCoercion::String,
        other => return Err(format!(
            "unknown coercion `{other}` (expected Int, Float, Boolean or String)",
        )),
    };
    Ok((scalar_name.trim().to_string(), coercion))
}
