use stepwise_core::{Failure, Result};

/// Parse a base-10 integer, ignoring surrounding whitespace
pub fn parse_int(text: String) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|e| Failure::step_with_source("parse-int", e))
}
