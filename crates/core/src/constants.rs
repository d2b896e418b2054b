/// Constants used throughout the stepwise codebase
// Log filter used when neither a flag nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Rendering for boundary payloads that have no textual form
pub const OPAQUE_PAYLOAD: &str = "<opaque panic payload>";
