//! Schema-driven editing of GraphQL operation documents.
//!
//! An [`Explorer`](explorer::Explorer) session lets a host toggle fields,
//! arguments, input-object fields and inline fragments of a single operation
//! against a [`Schema`](schema::Schema). The document text stays the source of
//! truth: every accepted edit re-parses the current text, splices the change
//! into the affected sibling list only, and hands the re-serialized document
//! to a [`DocumentSink`](document::DocumentSink).

pub mod ast;
pub mod defaults;
pub mod document;
pub mod explorer;
pub(crate) mod file_reader;
pub mod operation;
pub mod plugins;
pub mod schema;
pub mod types;
pub mod view;

pub use file_reader::ReadContentError;

#[cfg(test)]
mod test_utils;
