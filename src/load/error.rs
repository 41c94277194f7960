//! Load-boundary error types.

use thiserror::Error;

/// Errors raised while loading reviewer or submission data.
///
/// Malformed input is fatal by contract: the loader fails fast with a
/// descriptive error instead of substituting defaults. The only accepted
/// defaults are absent `conflicts` / `author_emails` lists, which the
/// schema itself fills in as empty.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The content was not valid JSON for the expected schema
    /// (includes missing required fields).
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two reviewer records share an id.
    #[error("duplicate reviewer id: {0}")]
    DuplicateReviewerId(String),

    /// Two submission records share an id.
    #[error("duplicate submission id: {0}")]
    DuplicateSubmissionId(String),
}
