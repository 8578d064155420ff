//! Error types for the Augmented Rx core library.
//!
//! The procedure model and the session state machine are total and never
//! produce these errors. They come from the collaborators around them: the
//! item store, template files, and path resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all fallible core operations.
#[derive(Error, Debug)]
pub enum RxError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No scanned item exists for the given ID
    #[error("Item with ID {id} not found")]
    ItemNotFound { id: u64 },
    /// No process template is registered under the given key
    #[error("Template '{key}' not found")]
    TemplateNotFound { key: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> RxError {
        RxError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RxError {
        RxError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RxError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Converts a failed `spawn_blocking` join into a configuration error.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RxError::database(message).with_source(e))
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, RxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder_message() {
        let err = RxError::invalid_input("code").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'code': must not be empty"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to query item").unwrap_err();
        assert!(matches!(err, RxError::Database { .. }));
        assert_eq!(err.to_string(), "Database error: Failed to query item");
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            RxError::ItemNotFound { id: 7 }.to_string(),
            "Item with ID 7 not found"
        );
        assert_eq!(
            RxError::TemplateNotFound {
                key: "insulin".to_string()
            }
            .to_string(),
            "Template 'insulin' not found"
        );
    }
}
