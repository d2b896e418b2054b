//! Panic bridge: write a chain of fallible calls as plain sequential code.
//!
//! [`wrap_to_panic`] and [`panic_if_error`] turn a failure into a non-local
//! transfer, and [`panic_to_pair`] is the boundary that catches it and hands
//! back an ordinary `Result`.
//!
//! ```
//! use stepwise_core::functional::bridge::{panic_to_pair, wrap_to_panic};
//!
//! let parse = wrap_to_panic(|s: &str| s.trim().parse::<i64>().map_err(|e| e.to_string()));
//! let sum = panic_to_pair(|| {
//!     let a = parse("100");
//!     let b = parse("50");
//!     a + b
//! });
//! assert_eq!(sum.unwrap(), 150);
//! ```
//!
//! Transfers ride the unwinding machinery, so the bridge needs the default
//! `panic = "unwind"` strategy. A transfer with no enclosing boundary unwinds
//! the whole thread.

use crate::constants::OPAQUE_PAYLOAD;
use crate::errors::Failure;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

/// The unwinding payload raised by the bridge. Only [`panic_to_pair`] knows
/// this type, so a bridge transfer cannot be mistaken for a genuine panic.
struct Transfer(Failure);

fn raise(failure: Failure) -> ! {
    // resume_unwind does not invoke the panic hook
    panic::resume_unwind(Box::new(Transfer(failure)))
}

/// Turn a fallible function into a total one.
///
/// The returned function yields the success value directly; on failure it
/// does not return and transfers the failure to the nearest boundary.
pub fn wrap_to_panic<A, B, E, F>(f: F) -> impl Fn(A) -> B
where
    F: Fn(A) -> Result<B, E>,
    E: Into<Failure>,
{
    move |a| panic_if_error(f(a))
}

/// Return the success value or transfer the failure
pub fn panic_if_error<T, E>(outcome: Result<T, E>) -> T
where
    E: Into<Failure>,
{
    match outcome {
        Ok(value) => value,
        Err(failure) => raise(failure.into()),
    }
}

/// [`panic_if_error`] for the `(value, failure)` pair form
pub fn panic_if_error_pair<T, E>(value: T, failure: Option<E>) -> T
where
    E: Into<Failure>,
{
    match failure {
        Some(failure) => raise(failure.into()),
        None => value,
    }
}

/// Run `block` and catch the first transfer it raises.
///
/// A bridge transfer comes back as exactly the failure it carried. Any other
/// unwinding payload (`panic!("...")`, `panic_any(42)`, ...) is rendered to
/// text and returned as [`Failure::Transfer`]; nothing escapes the boundary.
pub fn panic_to_pair<T, F>(block: F) -> Result<T, Failure>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(block)).map_err(|payload| {
        let failure = failure_from_payload(payload);
        debug!(%failure, "boundary caught transfer");
        failure
    })
}

fn failure_from_payload(payload: Box<dyn Any + Send>) -> Failure {
    let payload = match payload.downcast::<Transfer>() {
        Ok(transfer) => return transfer.0,
        Err(other) => other,
    };
    match payload.downcast::<Failure>() {
        Ok(failure) => *failure,
        Err(other) => Failure::transfer(render_payload(other.as_ref())),
    }
}

fn render_payload(payload: &(dyn Any + Send)) -> String {
    macro_rules! render_as {
        ($($ty:ty),+) => {
            $(
                if let Some(value) = payload.downcast_ref::<$ty>() {
                    return value.to_string();
                }
            )+
        };
    }

    render_as!(&'static str, String, i32, i64, u32, u64, usize, isize, bool, char);

    if let Some(err) = payload.downcast_ref::<Box<dyn std::error::Error + Send + Sync>>() {
        return err.to_string();
    }
    if let Some(err) = payload.downcast_ref::<anyhow::Error>() {
        return format!("{err:#}");
    }
    OPAQUE_PAYLOAD.to_string()
}
