//! Ordinary fallible operations usable as pipeline steps
//!
//! Every function here has the `A -> Result<B, Failure>` shape, so each one
//! drops straight into a composer, a monad step, or `wrap_to_panic`.

pub mod codec;
pub mod io;
pub mod numeric;
pub mod random;

pub use codec::{
    base64_decode, base64_encode, bytes_to_str, json_decode, json_value, str_to_bytes,
};
pub use io::read_file;
pub use numeric::parse_int;
pub use random::{random_bytes, random_fill, MAX_RANDOM_BYTES};
