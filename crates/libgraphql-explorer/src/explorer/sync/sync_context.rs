use crate::defaults::DefaultSelectionPolicy;
use crate::defaults::DefaultValueGenerator;
use crate::defaults::LiteralEncoder;
use crate::explorer::CachedNode;
use crate::explorer::ExplorerConfig;
use crate::explorer::ExplorerPath;
use crate::explorer::UndoCache;
use crate::schema::Schema;

/// Everything a synchronizer may consult while computing one edit.
///
/// The undo cache is read-only here. Removals are staged and only reach the
/// [`UndoCache`] once the whole edit has succeeded, so an edit that is
/// rejected halfway never leaves the cache out of step with the document.
pub struct SyncContext<'a> {
    cache: &'a UndoCache,
    encoder: &'a LiteralEncoder,
    generator: DefaultValueGenerator<'a>,
    schema: &'a Schema,
    selection_policy: &'a dyn DefaultSelectionPolicy,
    staged_removals: Vec<(ExplorerPath, CachedNode)>,
}
impl<'a> SyncContext<'a> {
    pub fn cached(&self, path: &ExplorerPath) -> Option<&'a CachedNode> {
        self.cache.get(path)
    }

    pub fn encoder(&self) -> &'a LiteralEncoder {
        self.encoder
    }

    pub fn generator(&self) -> &DefaultValueGenerator<'a> {
        &self.generator
    }

    pub(crate) fn into_staged_removals(self) -> Vec<(ExplorerPath, CachedNode)> {
        self.staged_removals
    }

    pub(crate) fn new(
        schema: &'a Schema,
        config: &'a ExplorerConfig,
        cache: &'a UndoCache,
    ) -> Self {
        Self {
            cache,
            encoder: config.encoder(),
            generator: DefaultValueGenerator::new(
                schema,
                config.encoder(),
                config.argument_policy(),
            ),
            schema,
            selection_policy: config.selection_policy(),
            staged_removals: vec![],
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn selection_policy(&self) -> &'a dyn DefaultSelectionPolicy {
        self.selection_policy
    }

    pub(crate) fn stage_removal(&mut self, path: ExplorerPath, node: CachedNode) {
        self.staged_removals.push((path, node));
    }
}
