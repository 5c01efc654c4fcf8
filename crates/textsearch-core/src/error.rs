//! Error types for the text search engine

use thiserror::Error;

/// Result type alias for index operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors raised while feeding documents into the index
///
/// Tokenizing and querying in-memory text cannot fail; only reading a
/// document can.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Document unreadable: {document}: {source}")]
    DocumentUnreadable {
        document: String,
        source: std::io::Error,
    },
}

impl IndexError {
    /// Name of the document the error refers to
    pub fn document(&self) -> &str {
        match self {
            IndexError::DocumentUnreadable { document, .. } => document,
        }
    }
}
