//! Error types for the docview utilities.

use thiserror::Error;

/// Result type alias using DocviewError.
pub type Result<T> = std::result::Result<T, DocviewError>;

/// Errors that can occur in the docview utilities.
#[derive(Error, Debug)]
pub enum DocviewError {
    /// Invalid argument provided.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Unsupported document format.
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// Render worker endpoint could not be used.
    #[error("Render worker unavailable at {url}: {reason}")]
    WorkerUnavailable { url: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Internal error (unexpected).
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DocviewError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a worker unavailable error.
    pub fn worker_unavailable(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WorkerUnavailable {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DocviewError::UnsupportedFormat {
            format: "docx".to_string(),
        };
        assert!(err.to_string().contains("docx"));
    }

    #[test]
    fn test_worker_unavailable_display() {
        let err = DocviewError::worker_unavailable("https://example.com/worker.js", "404");
        let msg = err.to_string();
        assert!(msg.contains("https://example.com/worker.js"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DocviewError = io.into();
        assert!(matches!(err, DocviewError::Io(_)));
    }
}
