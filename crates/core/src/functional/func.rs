//! The fallible-function shape every composition style operates on

use crate::errors::Failure;
use std::sync::Arc;

/// A boxed fallible function `A -> Result<B, E>`.
///
/// Any `Fn(A) -> Result<B, E>` closure or fn item is a fallible function;
/// this alias names the type-erased form for storing them in collections.
pub type FuncErr<A, B, E = Failure> = Box<dyn Fn(A) -> Result<B, E> + Send + Sync>;

/// A shared, clonable fallible function
pub type SharedFuncErr<A, B, E = Failure> = Arc<dyn Fn(A) -> Result<B, E> + Send + Sync>;

/// Box a fallible function
pub fn boxed<A, B, E, F>(f: F) -> FuncErr<A, B, E>
where
    F: Fn(A) -> Result<B, E> + Send + Sync + 'static,
{
    Box::new(f)
}

/// Wrap a fallible function in an `Arc`
pub fn shared<A, B, E, F>(f: F) -> SharedFuncErr<A, B, E>
where
    F: Fn(A) -> Result<B, E> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Lift a total function into a fallible one that never fails
pub fn lift<A, B, E, F>(f: F) -> impl Fn(A) -> Result<B, E>
where
    F: Fn(A) -> B,
{
    move |a| Ok(f(a))
}

/// Build an outcome from a `(value, failure)` pair.
///
/// A present failure wins; the value is dropped.
pub fn from_pair<T, E>(value: T, failure: Option<E>) -> Result<T, E> {
    match failure {
        Some(failure) => Err(failure),
        None => Ok(value),
    }
}

/// Split an outcome into its `(value, failure)` pair form
pub fn into_pair<T, E>(outcome: Result<T, E>) -> (Option<T>, Option<E>) {
    match outcome {
        Ok(value) => (Some(value), None),
        Err(failure) => (None, Some(failure)),
    }
}
