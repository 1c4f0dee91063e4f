use std::path::PathBuf;

/// Errors raised while loading or querying a dictionary.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// Reading the word list failed
    #[error("Failed to read word list")]
    Io(#[from] std::io::Error),

    /// The JSON word list could not be parsed
    #[error("Invalid JSON word list")]
    Json(#[from] serde_json::Error),

    /// A line of a plain-text word list could not be parsed
    #[error("Invalid entry on line {line}: {reason}")]
    InvalidEntry {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// The file extension does not name a known word list format
    #[error("Unsupported word list format: {0}")]
    UnsupportedFormat(PathBuf),

    /// A backing service failed to answer a query
    #[error("Dictionary lookup failed: {0}")]
    Lookup(String),
}
