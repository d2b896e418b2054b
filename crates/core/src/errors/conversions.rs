//! Conversion implementations for failure types

use super::types::Failure;
use std::path::PathBuf;

// Kept by hand rather than #[from] so the variants can carry extra context
impl From<std::io::Error> for Failure {
    fn from(error: std::io::Error) -> Self {
        Failure::FileSystem {
            path: PathBuf::new(),
            operation: "unknown".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Failure {
    fn from(error: serde_json::Error) -> Self {
        Failure::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        Failure::message(format!("{error:#}"))
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Failure::message(message)
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Failure::message(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_becomes_a_message_failure() {
        let from_str: Failure = "disk full".into();
        let from_string: Failure = String::from("disk full").into();

        assert!(matches!(from_str, Failure::Message { .. }));
        assert_eq!(from_str.to_string(), "disk full");
        assert_eq!(from_string.to_string(), Failure::message("disk full").to_string());
    }

    #[test]
    fn anyhow_context_chain_is_kept() {
        let error = anyhow::anyhow!("root cause").context("loading payload");
        let failure = Failure::from(error);
        assert_eq!(failure.to_string(), "loading payload: root cause");
    }
}
