//! Content error types
//!
//! Everything that can go wrong while building the registry and site content.
//! All of these are authoring mistakes caught at construction; looking up an
//! unknown project id is not an error and never produces one.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing content
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Content file could not be read
    #[error("Failed to read content file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// TOML syntax error, missing field or unknown field
    #[error("Failed to parse {document}: {message}")]
    Parse { document: String, message: String },

    /// Two projects share an identifier
    #[error("Duplicate project id: {0}")]
    DuplicateId(String),

    /// Identifier cannot round-trip through the URL hash
    #[error("Invalid project id {id:?}: {reason}")]
    InvalidId { id: String, reason: &'static str },

    /// A required text field is blank
    #[error("Project {id:?} has an empty {field}")]
    EmptyField { id: String, field: &'static str },

    /// Date is not `YYYY-MM`
    #[error("Project {id:?} has an invalid date {date:?} (expected YYYY-MM)")]
    InvalidDate { id: String, date: String },

    /// A required site content field is blank
    #[error("Site content has an empty {0}")]
    EmptySiteField(&'static str),
}

/// Result type alias for content operations
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::DuplicateId("airbnb-berlin".to_string());
        assert_eq!(err.to_string(), "Duplicate project id: airbnb-berlin");

        let err = RegistryError::InvalidDate {
            id: "x".to_string(),
            date: "2025/08".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Project \"x\" has an invalid date \"2025/08\" (expected YYYY-MM)"
        );
    }
}
