//! Dynamic pipeline steps chosen at runtime
//!
//! Every step maps a [`Payload`] to a [`Monad<Payload>`], so a pipeline can be
//! assembled from a list of names and bound with [`Monad::bind_all`]. A step
//! that receives the wrong kind of payload fails with
//! [`Failure::TypeMismatch`] rather than panicking.

use crate::ops;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use stepwise_core::functional::monad::{Monad, Step};
use stepwise_core::{Failure, Result};
use tracing::debug;

/// Names accepted by [`by_name`]
pub const STEP_NAMES: &[&str] = &[
    "read", "utf8", "bytes", "base64", "b64encode", "json", "int", "random",
];

/// The runtime value flowing through a dynamic pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Payload {
    Text(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
    Int(i64),
}

impl Payload {
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Text(_) => "text",
            Payload::Bytes(_) => "bytes",
            Payload::Json(_) => "json",
            Payload::Int(_) => "int",
        }
    }

    pub fn into_text(self) -> Result<String> {
        match self {
            Payload::Text(text) => Ok(text),
            other => Err(Failure::type_mismatch("text", other.kind())),
        }
    }

    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Payload::Bytes(bytes) => Ok(bytes),
            other => Err(Failure::type_mismatch("bytes", other.kind())),
        }
    }

    pub fn into_int(self) -> Result<i64> {
        match self {
            Payload::Int(n) => Ok(n),
            other => Err(Failure::type_mismatch("int", other.kind())),
        }
    }

    pub fn into_json(self) -> Result<serde_json::Value> {
        match self {
            Payload::Json(value) => Ok(value),
            other => Err(Failure::type_mismatch("json", other.kind())),
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Text(text) => write!(f, "{text}"),
            Payload::Bytes(bytes) => {
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Payload::Json(value) => write!(f, "{value:#}"),
            Payload::Int(n) => write!(f, "{n}"),
        }
    }
}

/// Build a step from an extractor, a typed operation and a wrapper
fn lift_step<A, B>(
    extract: fn(Payload) -> Result<A>,
    op: fn(A) -> Result<B>,
    wrap: fn(B) -> Payload,
) -> Step<Payload>
where
    A: 'static,
    B: 'static,
{
    Arc::new(move |payload: Payload| {
        Monad::lift(move || extract(payload.clone()).and_then(op).map(wrap))
    })
}

/// Text path → file bytes
pub fn read_file() -> Step<Payload> {
    lift_step(
        Payload::into_text,
        |path: String| ops::read_file(PathBuf::from(path)),
        Payload::Bytes,
    )
}

/// Bytes → UTF-8 text
pub fn bytes_to_str() -> Step<Payload> {
    lift_step(Payload::into_bytes, ops::bytes_to_str, Payload::Text)
}

/// Text → UTF-8 bytes
pub fn str_to_bytes() -> Step<Payload> {
    lift_step(Payload::into_text, ops::str_to_bytes, Payload::Bytes)
}

/// Base64 text → decoded bytes
pub fn base64_decode() -> Step<Payload> {
    lift_step(Payload::into_text, ops::base64_decode, Payload::Bytes)
}

/// Bytes → base64 text
pub fn base64_encode() -> Step<Payload> {
    lift_step(Payload::into_bytes, ops::base64_encode, Payload::Text)
}

/// JSON bytes → JSON value
pub fn json_decode() -> Step<Payload> {
    lift_step(Payload::into_bytes, ops::json_value, Payload::Json)
}

/// Text → integer
pub fn parse_int() -> Step<Payload> {
    lift_step(Payload::into_text, ops::parse_int, Payload::Int)
}

/// Integer length → that many random bytes
pub fn random_fill() -> Step<Payload> {
    lift_step(
        Payload::into_int,
        |len: i64| -> Result<Vec<u8>> {
            let len =
                usize::try_from(len).map_err(|e| Failure::step_with_source("random", e))?;
            ops::random_bytes(len)
        },
        Payload::Bytes,
    )
}

/// Resolve a step by name
pub fn by_name(name: &str) -> Result<Step<Payload>> {
    let step = match name {
        "read" => read_file(),
        "utf8" => bytes_to_str(),
        "bytes" => str_to_bytes(),
        "base64" => base64_decode(),
        "b64encode" => base64_encode(),
        "json" => json_decode(),
        "int" => parse_int(),
        "random" => random_fill(),
        unknown => {
            return Err(Failure::step(
                "resolve",
                format!(
                    "unknown step '{unknown}', expected one of: {}",
                    STEP_NAMES.join(", ")
                ),
            ))
        }
    };
    debug!(step = name, "resolved dynamic step");
    Ok(step)
}

/// Resolve an ordered list of step names, failing on the first unknown name
pub fn parse_pipeline<S: AsRef<str>>(names: &[S]) -> Result<Vec<Step<Payload>>> {
    names.iter().map(|name| by_name(name.as_ref())).collect()
}
