//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for testgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A name handed to the syntax builder is not a valid C# identifier
    #[error("Invalid {kind} identifier: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },

    /// The tree-sitter grammar could not be loaded
    #[error("Parser setup failed: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl Error {
    pub fn invalid_identifier(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            value: value.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identifier_message() {
        let err = Error::invalid_identifier("attribute", "Test Fixture");
        assert_eq!(
            err.to_string(),
            "Invalid attribute identifier: \"Test Fixture\""
        );
    }

    #[test]
    fn test_file_system_error_keeps_io_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::FileSystem {
            message: "cannot read .testgen.toml".into(),
            path: Some(PathBuf::from(".testgen.toml")),
            source: Some(io),
        };
        assert_eq!(
            err.to_string(),
            "File system error: cannot read .testgen.toml"
        );
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "gone");
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(Error::Configuration("bad preset".into()));
        let err = result.context("loading .testgen.toml").unwrap_err();
        assert_eq!(
            err.to_string(),
            "loading .testgen.toml: Configuration error: bad preset"
        );
    }
}
