use std::path::PathBuf;
use stepwise_core::{Failure, Result};
use tracing::trace;

/// Read a whole file into memory
pub fn read_file(path: PathBuf) -> Result<Vec<u8>> {
    trace!(path = %path.display(), "reading file");
    std::fs::read(&path).map_err(|e| Failure::file_system(path, "read", e))
}
