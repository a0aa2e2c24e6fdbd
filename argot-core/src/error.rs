//! Core error types

use thiserror::Error;

/// Errors raised while compiling rule tables into stages
#[derive(Error, Debug)]
pub enum CoreError {
    /// A rule entry is semantically invalid
    #[error("invalid rule '{key}': {reason}")]
    InvalidRule {
        /// The rule-table key that failed validation
        key: String,
        /// Why the entry was rejected
        reason: String,
    },

    /// A rule pattern failed to compile
    #[error("pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration is invalid as a whole
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
