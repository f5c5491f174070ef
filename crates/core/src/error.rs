use std::path::PathBuf;
use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that can occur while loading the IR or generating documentation.
#[derive(Debug, Error)]
pub enum DocError {
    /// The service graph has no root `Service` type.
    #[error("Service graph has no root type named `Service`")]
    MissingServiceType,
    /// The IR document could not be deserialized.
    #[error("Invalid IR at {location}: {message}")]
    InvalidIr {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// An already-parsed IR value has the wrong shape.
    ///
    /// Values handed over as JSON trees carry no source position.
    #[error("Invalid IR: {message}")]
    InvalidValue {
        /// Error message
        message: String,
    },
    /// markdown-rs rejected a description.
    #[error("Markdown error at {location}: {message}")]
    Markdown {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// A configured input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed to load
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl DocError {
    /// Create an invalid IR error with location
    pub fn invalid_ir(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::InvalidIr {
            message: message.into(),
            location: SourceLocation::new(line, column),
        }
    }

    /// Create an invalid IR error for a value without source text
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue {
            message: message.into(),
        }
    }

    /// Create an IO error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for DocError {
    fn from(err: serde_json::Error) -> Self {
        let (line, column) = (err.line(), err.column());
        let mut message = err.to_string();
        // serde_json appends " at line X column Y"; the location already carries it.
        if let Some(idx) = message.rfind(" at line ") {
            message.truncate(idx);
        }
        Self::invalid_ir(message, line, column)
    }
}
