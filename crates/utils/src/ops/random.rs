use rand::{rngs::OsRng, RngCore};
use stepwise_core::{Failure, Result};

/// Upper bound on a single random request
pub const MAX_RANDOM_BYTES: usize = 1 << 20;

/// Fill `buffer` with bytes from the operating system RNG
pub fn random_fill(mut buffer: Vec<u8>) -> Result<Vec<u8>> {
    OsRng
        .try_fill_bytes(&mut buffer)
        .map_err(|e| Failure::step_with_source("random", e))?;
    Ok(buffer)
}

/// Produce `len` random bytes
pub fn random_bytes(len: usize) -> Result<Vec<u8>> {
    if len > MAX_RANDOM_BYTES {
        return Err(Failure::step(
            "random",
            format!("requested {len} bytes, limit is {MAX_RANDOM_BYTES}"),
        ));
    }
    random_fill(vec![0; len])
}
