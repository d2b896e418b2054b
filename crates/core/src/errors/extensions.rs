//! Extension traits for failure handling

use super::types::{Failure, Result};

/// Extension trait for naming the step a `Result` came from
pub trait ResultExt<T> {
    /// Attach a step name to the failure
    fn context(self, step: impl Into<String>) -> Result<T>;

    /// Attach a lazily computed step name to the failure
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Failure>,
{
    fn context(self, step: impl Into<String>) -> Result<T> {
        self.map_err(|e| Failure::step_with_source(step, e.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Failure::step_with_source(f(), e.into()))
    }
}
