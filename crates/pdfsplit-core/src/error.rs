use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Invalid arguments: {0}")]
    Usage(String),

    #[error("Failed to read {}: {reason}", .path.display())]
    SourceRead { path: PathBuf, reason: String },

    #[error("Failed to parse PDF: {0}")]
    ParseError(String),

    #[error("Invalid page range: {0}")]
    InvalidRange(String),

    /// A single page measures above the limit on its own, so no partition exists.
    /// `page_number` is 1-based.
    #[error(
        "A single page exceeds the maximum file size, unable to split \
         (page {page_number} measures {size} bytes, limit is {max_size} bytes)"
    )]
    UnsplittableRange {
        page_number: usize,
        size: u64,
        max_size: u64,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Failed to save {}: {reason}", .path.display())]
    PersistError { path: PathBuf, reason: String },
}
