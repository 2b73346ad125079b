use crate::document::DocumentMemo;
use crate::document::DocumentSink;
use crate::explorer::Diagnostic;
use crate::explorer::EditOutcome;
use crate::explorer::ExplorerConfig;
use crate::explorer::ExplorerPath;
use crate::explorer::FieldAddMode;
use crate::explorer::UndoCache;
use crate::explorer::lookup;
use crate::explorer::sync;
use crate::explorer::sync::EditAction;
use crate::explorer::sync::SyncContext;
use crate::operation;
use crate::operation::OperationKind;
use crate::operation::OperationResolver;
use crate::operation::PreviousOperations;
use crate::schema::Schema;
use crate::view::ExplorerTree;
use crate::view::TreeBuilder;

type Result<T> = std::result::Result<T, Diagnostic>;

/// An editing session over one operation document.
///
/// The document text is the single source of truth. Every edit starts from a
/// fresh parse of the current text, changes only the sibling list that holds
/// the addressed entity, and hands the re-serialized document to the
/// [`DocumentSink`]. The session keeps the new text as its own current text,
/// so hosts that feed the sink's output back through [`Explorer::set_text`]
/// see no difference.
///
/// No public operation panics or returns an error: every refusal is logged
/// and returned as [`EditOutcome::Rejected`].
pub struct Explorer<'schema> {
    config: ExplorerConfig,
    memo: DocumentMemo,
    previous_operations: PreviousOperations,
    schema: &'schema Schema,
    sink: Box<dyn DocumentSink>,
    text: String,
    undo_cache: UndoCache,
}
impl<'schema> Explorer<'schema> {
    /// Select the addressed field, inline fragment, argument or input field.
    /// Fields are added bare (see [`FieldAddMode::Bare`]).
    pub fn add(&mut self, path: &ExplorerPath) -> EditOutcome {
        self.apply(path, EditAction::Add(FieldAddMode::Bare))
    }

    /// Select the addressed field together with all of its leaf-typed
    /// subfields.
    pub fn add_with_leaf_subfields(&mut self, path: &ExplorerPath) -> EditOutcome {
        self.apply(path, EditAction::Add(FieldAddMode::WithLeafSubfields))
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Indicates if the addressed entity is present in the current text.
    pub fn is_selected(&mut self, path: &ExplorerPath) -> bool {
        let document = self.memo.resolve(&self.text);
        lookup(&document, path).is_some()
    }

    pub fn new(
        schema: &'schema Schema,
        config: ExplorerConfig,
        sink: impl DocumentSink + 'static,
    ) -> Self {
        Self {
            config,
            memo: DocumentMemo::new(),
            previous_operations: PreviousOperations::new(),
            schema,
            sink: Box::new(sink),
            text: String::new(),
            undo_cache: UndoCache::new(),
        }
    }

    pub fn remove(&mut self, path: &ExplorerPath) -> EditOutcome {
        self.apply(path, EditAction::Remove)
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    /// Replace the current document text, typically with text the host's
    /// editor produced. Never notifies the sink.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Re-encode `raw` as a literal of the addressed argument's (or input
    /// field's) leaf type.
    pub fn set_value(&mut self, path: &ExplorerPath, raw: &str) -> EditOutcome {
        self.apply(path, EditAction::SetValue(raw))
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Remove the addressed entity if it is selected; add it otherwise.
    pub fn toggle(&mut self, path: &ExplorerPath) -> EditOutcome {
        if self.is_selected(path) {
            self.remove(path)
        } else {
            self.add(path)
        }
    }

    /// The explorer tree for one operation kind, rendered from a fresh parse
    /// of the current text. Returns `None` if the schema has no root type for
    /// `kind`.
    pub fn tree(&mut self, kind: OperationKind) -> Option<ExplorerTree> {
        let document = self.memo.resolve(&self.text);
        TreeBuilder::new(self.schema, &self.config, &document).build(kind)
    }

    pub fn undo_cache(&self) -> &UndoCache {
        &self.undo_cache
    }

    fn apply(&mut self, path: &ExplorerPath, action: EditAction<'_>) -> EditOutcome {
        match self.try_apply(path, action) {
            Ok(Some(text)) => {
                self.text = text.to_owned();
                self.sink.document_changed(text);
                EditOutcome::Applied
            },

            Ok(None) => {
                log::debug!("`{path}` needed no change.");
                EditOutcome::Unchanged
            },

            Err(diag) => {
                diag.log();
                EditOutcome::Rejected(diag)
            },
        }
    }

    /// Returns the new document text, or `None` if the edit changed nothing.
    fn try_apply(
        &mut self,
        path: &ExplorerPath,
        action: EditAction<'_>,
    ) -> Result<Option<String>> {
        path.validate()?;

        let kind = path.kind();
        let schema = self.schema;
        let root_type = schema.root_type(&kind)
            .ok_or(Diagnostic::UnknownOperationRoot { kind })?;

        let document = self.memo.resolve(&self.text);
        let selections = operation::selection_set(&OperationResolver::locate(&document, kind))
            .items
            .to_owned();

        let mut ctx = SyncContext::new(schema, &self.config, &self.undo_cache);
        let spliced = sync::edit_operation(&mut ctx, root_type, path, selections, action)?;
        if !spliced.changed {
            return Ok(None);
        }
        let staged_removals = ctx.into_staged_removals();

        let text = OperationResolver::commit(
            document,
            kind,
            spliced.nodes,
            &mut self.previous_operations,
        );
        for (removed_path, node) in staged_removals {
            self.undo_cache.record_removal(removed_path, node);
        }
        Ok(Some(text))
    }
}
