//! Byte, text, base64 and JSON conversions

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::de::DeserializeOwned;
use stepwise_core::{Failure, Result};

/// Interpret bytes as UTF-8 text
pub fn bytes_to_str(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| Failure::step_with_source("utf8", e))
}

/// Encode text as UTF-8 bytes; never fails
pub fn str_to_bytes(text: String) -> Result<Vec<u8>> {
    Ok(text.into_bytes())
}

/// Decode standard-alphabet base64.
///
/// Surrounding whitespace and embedded line breaks (`\r`, `\n`) are skipped,
/// so line-wrapped input decodes; any other stray byte is a failure.
pub fn base64_decode(encoded: String) -> Result<Vec<u8>> {
    let unwrapped: String = encoded
        .trim()
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect();
    STANDARD
        .decode(unwrapped)
        .map_err(|e| Failure::step_with_source("base64-decode", e))
}

/// Encode bytes as standard-alphabet base64; never fails
pub fn base64_encode(bytes: Vec<u8>) -> Result<String> {
    Ok(STANDARD.encode(bytes))
}

/// Decode JSON into any deserializable type
pub fn json_decode<T: DeserializeOwned>(bytes: Vec<u8>) -> Result<T> {
    serde_json::from_slice(&bytes).map_err(Failure::from)
}

/// Decode JSON into an untyped value
pub fn json_value(bytes: Vec<u8>) -> Result<serde_json::Value> {
    json_decode(bytes)
}
