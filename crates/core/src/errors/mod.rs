//! Failure type and result extensions for stepwise operations

mod builders;
mod conversions;
mod extensions;
mod types;

pub use extensions::*;
pub use types::{Failure, Result};
