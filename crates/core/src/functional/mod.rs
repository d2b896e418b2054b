//! Short-circuiting composition of fallible functions
//!
//! Three interchangeable styles over the same `A -> Result<B, E>` shape:
//! static composition ([`compose`]), an explicit failure-threading monad
//! ([`monad`]), and the panic bridge ([`bridge`]) for sequential,
//! variable-binding code.

pub mod bridge;
pub mod compose;
pub mod func;
pub mod monad;

// Re-export commonly used items
pub use bridge::{panic_if_error, panic_if_error_pair, panic_to_pair, wrap_to_panic};
pub use compose::{compose2, compose3, compose4, compose5, FallibleExt};
pub use func::{FuncErr, SharedFuncErr};
pub use monad::{Monad, Step};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::bridge::{panic_if_error, panic_if_error_pair, panic_to_pair, wrap_to_panic};
    pub use super::compose::{compose2, compose3, compose4, compose5, FallibleExt};
    pub use super::func::{FuncErr, SharedFuncErr};
    pub use super::monad::{bind, exec, step, unit, Monad, Step};
    pub use crate::compose;
}
