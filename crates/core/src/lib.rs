//! Short-circuit composition of fallible operations.
//!
//! Chains of `A -> Result<B, Failure>` steps stop at the first failure, in
//! whichever style reads best at the call site.
//!
//! ## Key Components
//!
//! - **`errors`**: the single [`Failure`] type and the `Result` alias every
//!   step returns.
//! - **`functional::compose`**: fixed-length, statically typed pipelines.
//! - **`functional::monad`**: failure-threading monad for pipelines assembled
//!   at runtime.
//! - **`functional::bridge`**: sequential code with named intermediates,
//!   caught at a single `panic_to_pair` boundary.
//!
//! All three styles agree: the same steps on the same input produce the same
//! value, or fail at the same step with the same [`Failure`].

pub mod constants;
pub mod errors;
pub mod functional;

pub use self::{
    constants::*,
    errors::{Failure, Result, ResultExt},
};
