//! Error types for name normalization.

use thiserror::Error;

/// Errors that can occur while normalizing a name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    /// Normalization left nothing: the input had no alphabetic characters.
    #[error("invalid name: {input:?} contains no letters")]
    InvalidName { input: String },
}

/// Convenience type alias for name operations.
pub type Result<T> = std::result::Result<T, NameError>;
