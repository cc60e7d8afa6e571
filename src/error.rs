//! Error types for untextract library.

use std::io;
use thiserror::Error;

/// Result type alias for untextract operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading analysis output or building text artifacts.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON or does not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Threshold calibration was attempted over a document with no lines.
    #[error("Document contains no lines")]
    EmptyDocument,

    /// A line is missing the bounding-box coordinates paragraph detection relies on.
    #[error("Line block {block_id} on page {page} has no bounding box top/left")]
    MalformedGeometry {
        /// Id of the offending LINE block
        block_id: String,
        /// Page number (1-indexed)
        page: u32,
    },

    /// A relationship points at a block id that is not in the response.
    #[error("Missing block referenced by relationship: {0}")]
    MissingBlock(String),

    /// The response structure is not usable (e.g. content before the first page).
    #[error("Invalid analysis response: {0}")]
    InvalidResponse(String),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
