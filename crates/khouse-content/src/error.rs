//! Error types for khouse-content.

use thiserror::Error;

/// Result type for khouse-content operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the catalog.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A language code outside the supported set.
    #[error("Unknown language code '{0}'")]
    UnknownLanguage(String),

    /// Two positionally coupled lists have different lengths.
    #[error("Catalog mismatch in '{language}': {field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        /// Language whose tree is inconsistent.
        language: &'static str,
        /// Path of the offending list.
        field: &'static str,
        /// Required length.
        expected: usize,
        /// Length found.
        actual: usize,
    },

    /// A room card without any image.
    #[error("Room card {0} has no images")]
    EmptyGallery(u32),
}
