use crate::explorer::Diagnostic;

/// The result of a single explorer edit.
#[derive(Clone, Debug, PartialEq)]
pub enum EditOutcome {
    /// The document changed and the new text was handed to the
    /// [`DocumentSink`](crate::document::DocumentSink).
    Applied,

    /// The edit was refused. Nothing changed.
    Rejected(Diagnostic),

    /// The edit was valid but already satisfied (adding a selected entity,
    /// removing an absent one, setting a value to what it already is).
    Unchanged,
}
impl EditOutcome {
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        if let Self::Rejected(diag) = self {
            Some(diag)
        } else {
            None
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}
