//! Builder methods for creating failures with context

use super::types::Failure;
use std::path::PathBuf;

impl Failure {
    /// Create a step failure without an underlying cause
    #[must_use]
    pub fn step(step: impl Into<String>, message: impl Into<String>) -> Self {
        Failure::Step {
            step: step.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a step failure whose message is taken from `source`
    #[must_use]
    pub fn step_with_source(
        step: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let source = source.into();
        Failure::Step {
            step: step.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a file system failure with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Failure::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a type mismatch failure
    #[must_use]
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Failure::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a free-form failure
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Failure::Message {
            message: message.into(),
        }
    }

    /// Create a failure from a rendered non-failure payload
    #[must_use]
    pub fn transfer(payload: impl Into<String>) -> Self {
        Failure::Transfer {
            payload: payload.into(),
        }
    }

    /// Whether this failure was rendered from an arbitrary payload at a boundary
    pub fn is_transfer(&self) -> bool {
        matches!(self, Failure::Transfer { .. })
    }

    /// Name of the failing step, if the failure carries one
    pub fn step_name(&self) -> Option<&str> {
        match self {
            Failure::Step { step, .. } => Some(step),
            _ => None,
        }
    }
}
