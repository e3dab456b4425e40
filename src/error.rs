//! Error types for the Virast library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`VirastError`] enum.
//!
//! # Examples
//!
//! ```
//! use virast::error::{Result, VirastError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VirastError::grammar("service unreachable"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for Virast operations.
///
/// A failure aborts the remainder of the current document pass; nodes already
/// committed stay committed. There is no retry layer anywhere in the crate.
#[derive(Error, Debug)]
pub enum VirastError {
    /// Grammar-service errors other than transport or JSON decoding.
    #[error("Grammar error: {0}")]
    Grammar(String),

    /// Font acquisition failed before a text commit.
    #[error("Font error: {0}")]
    Font(String),

    /// Host document traversal or mutation failed.
    #[error("Document error: {0}")]
    Document(String),

    /// Transport failures talking to the grammar service.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with VirastError.
pub type Result<T> = std::result::Result<T, VirastError>;

impl VirastError {
    /// Create a new grammar error.
    pub fn grammar<S: Into<String>>(msg: S) -> Self {
        VirastError::Grammar(msg.into())
    }

    /// Create a new font error.
    pub fn font<S: Into<String>>(msg: S) -> Self {
        VirastError::Font(msg.into())
    }

    /// Create a new document error.
    pub fn document<S: Into<String>>(msg: S) -> Self {
        VirastError::Document(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        VirastError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = VirastError::grammar("Test grammar error");
        assert_eq!(error.to_string(), "Grammar error: Test grammar error");

        let error = VirastError::font("Test font error");
        assert_eq!(error.to_string(), "Font error: Test font error");

        let error = VirastError::document("Test document error");
        assert_eq!(error.to_string(), "Document error: Test document error");

        let error = VirastError::other("Test generic error");
        assert_eq!(error.to_string(), "Error: Test generic error");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let virast_error = VirastError::from(json_error);

        match virast_error {
            VirastError::Json(_) => {} // Expected
            _ => panic!("Expected JSON error variant"),
        }
    }
}
