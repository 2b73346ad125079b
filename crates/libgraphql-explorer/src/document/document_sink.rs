/// The external owner of the document text.
///
/// Every re-serialized document is handed to the sink. Owners that let the
/// user keep typing feed their editor's text back through
/// [`Explorer::set_text`](crate::explorer::Explorer::set_text).
pub trait DocumentSink {
    fn document_changed(&mut self, text: String);
}

impl<F: FnMut(String)> DocumentSink for F {
    fn document_changed(&mut self, text: String) {
        self(text)
    }
}
