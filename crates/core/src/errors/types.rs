//! Core failure type definitions

use std::path::PathBuf;

/// Result type alias for stepwise operations
pub type Result<T> = std::result::Result<T, Failure>;

/// The single failure kind carried through every composition style.
///
/// A `Failure` is opaque to the composition machinery: composers, monads and
/// the bridge move it around but never inspect or rewrite it. It is
/// `Send + Sync + 'static` so it can travel as an unwinding payload.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    /// A named step rejected its input
    #[error("step '{step}' failed: {message}")]
    Step {
        step: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system operations
    #[error("file system {operation} operation failed for '{}': {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// A dynamic step received a value of the wrong runtime kind
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Free-form failure
    #[error("{message}")]
    Message { message: String },

    /// A non-failure payload caught at a bridge boundary
    #[error("error happened: {payload}")]
    Transfer { payload: String },
}
