use crate::ast;
use crate::ast::operation::Document;
use crate::document;

/// Parses document text, remembering the last successful parse.
///
/// Text that fails to parse (typically because the user is mid-edit) yields
/// the last good document instead, so the explorer tree does not blank out
/// while the text is transiently invalid. Parse failures never reach the
/// caller.
#[derive(Clone, Debug, Default)]
pub struct DocumentMemo {
    last: Option<(String, Document)>,
}
impl DocumentMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text of the last successful parse, if any.
    pub fn last_good_text(&self) -> Option<&str> {
        self.last.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn resolve(&mut self, text: &str) -> Document {
        if text.trim().is_empty() {
            return document::empty_document();
        }

        if let Some((memo_text, memo_doc)) = &self.last
            && memo_text == text {
            return memo_doc.to_owned();
        }

        match ast::operation::parse(text) {
            Ok(doc) => {
                self.last = Some((text.to_string(), doc.to_owned()));
                doc
            },

            Err(err) => match &self.last {
                Some((memo_text, memo_doc)) if memo_text != text => {
                    log::debug!(
                        "Document text failed to parse ({err}); keeping the \
                        last successfully parsed document.",
                    );
                    memo_doc.to_owned()
                },

                _ => {
                    log::debug!("Document text failed to parse ({err}).");
                    document::empty_document()
                },
            },
        }
    }
}
