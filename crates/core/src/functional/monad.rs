//! A sequential monad that threads the failure state explicitly.
//!
//! A [`Monad<T, E>`] is a deferred computation `Option<E> -> Result<T, E>`:
//! the argument is the failure accumulated upstream, and once a failure is
//! present every later [`Monad::bind`] passes it through without invoking its
//! step. Values are immutable and can be run any number of times.
//!
//! ```
//! use stepwise_core::functional::monad::Monad;
//!
//! let parse = |s: String| Monad::lift(move || s.parse::<i64>().map_err(|e| e.to_string()));
//! let m = Monad::unit("20".to_string())
//!     .bind(parse)
//!     .bind(|n| Monad::unit(n + 1));
//!
//! assert_eq!(m.try_exec(), Ok(21));
//! ```

use crate::errors::Failure;
use crate::functional::bridge;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// A step whose output type matches its input, so steps can be stored in a
/// homogeneous sequence and chosen at runtime.
pub type Step<T, E = Failure> = Arc<dyn Fn(T) -> Monad<T, E> + Send + Sync>;

/// A computation that threads an explicit failure state
pub struct Monad<T, E = Failure> {
    run: Arc<dyn Fn(Option<E>) -> Result<T, E> + Send + Sync>,
}

impl<T, E> Clone for Monad<T, E> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T, E> fmt::Debug for Monad<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monad").finish_non_exhaustive()
    }
}

impl<T: 'static, E: 'static> Monad<T, E> {
    /// Build a monad from its raw state function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<E>) -> Result<T, E> + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Wrap a plain value (Return).
    ///
    /// Running it yields the value when no failure came in, and the incoming
    /// failure otherwise.
    pub fn unit(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::from_fn(move |state| match state {
            None => Ok(value.clone()),
            Some(failure) => Err(failure),
        })
    }

    /// A monad that always fails with `failure` unless an earlier failure is
    /// already in flight
    pub fn fail(failure: E) -> Self
    where
        E: Clone + Send + Sync,
    {
        Self::from_fn(move |state| Err(state.unwrap_or_else(|| failure.clone())))
    }

    /// Build a step from a fallible thunk.
    ///
    /// An incoming failure is passed through and the thunk is not invoked.
    pub fn lift<F>(f: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Self::from_fn(move |state| match state {
            None => f(),
            Some(failure) => Err(failure),
        })
    }

    /// Run the computation with an incoming failure state
    pub fn run(&self, state: Option<E>) -> Result<T, E> {
        (self.run)(state)
    }

    /// Sequence a step after this computation (Bind).
    ///
    /// `f` is only invoked when this computation succeeds; its monad then
    /// runs with no incoming failure.
    pub fn bind<U, F>(&self, f: F) -> Monad<U, E>
    where
        U: 'static,
        F: Fn(T) -> Monad<U, E> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Monad::from_fn(move |state| match upstream.run(state) {
            Ok(value) => f(value).run(None),
            Err(failure) => {
                trace!("bind short-circuited");
                Err(failure)
            }
        })
    }

    /// Transform the success value
    pub fn map<U, F>(&self, f: F) -> Monad<U, E>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Monad::from_fn(move |state| upstream.run(state).map(&f))
    }

    /// Bind every step of a runtime-chosen sequence, in order
    pub fn bind_all<I>(&self, steps: I) -> Monad<T, E>
    where
        I: IntoIterator<Item = Step<T, E>>,
    {
        steps.into_iter().fold(self.clone(), |acc, step| {
            acc.bind(move |value| step(value))
        })
    }

    /// Run with no incoming failure and return the outcome
    pub fn try_exec(&self) -> Result<T, E> {
        self.run(None)
    }

    /// Run with no incoming failure (Exec).
    ///
    /// A failure is raised as a bridge transfer: it is caught by the nearest
    /// enclosing [`panic_to_pair`](crate::functional::bridge::panic_to_pair)
    /// and is fatal to the thread otherwise.
    pub fn exec(&self) -> T
    where
        E: Into<Failure>,
    {
        bridge::panic_if_error(self.try_exec())
    }
}

/// Wrap a plain value (Return)
pub fn unit<T, E>(value: T) -> Monad<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: 'static,
{
    Monad::unit(value)
}

/// Sequence `f` after `m` (Bind)
pub fn bind<T, U, E, F>(m: &Monad<T, E>, f: F) -> Monad<U, E>
where
    T: 'static,
    U: 'static,
    E: 'static,
    F: Fn(T) -> Monad<U, E> + Send + Sync + 'static,
{
    m.bind(f)
}

/// Run `m` at the outermost level (Exec)
pub fn exec<T, E>(m: &Monad<T, E>) -> T
where
    T: 'static,
    E: Into<Failure> + 'static,
{
    m.exec()
}

/// Turn a closure into a [`Step`]
pub fn step<T, E, F>(f: F) -> Step<T, E>
where
    F: Fn(T) -> Monad<T, E> + Send + Sync + 'static,
{
    Arc::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::bridge::panic_to_pair;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn half(n: i64) -> Monad<i64, String> {
        Monad::lift(move || {
            if n % 2 == 0 {
                Ok(n / 2)
            } else {
                Err(format!("{n} is odd"))
            }
        })
    }

    #[test]
    fn unit_passes_incoming_failure_through() {
        let m: Monad<i64, String> = unit(5);
        assert_eq!(m.run(None), Ok(5));
        assert_eq!(m.run(Some("upstream".into())), Err("upstream".to_string()));
    }

    #[test]
    fn bind_threads_success_values() {
        let m = unit(40).bind(half).bind(half).map(|n| n + 1);
        assert_eq!(m.try_exec(), Ok(11));
    }

    #[test]
    fn bind_never_invokes_step_after_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let m = unit(3).bind(half).bind(move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            unit(n)
        });

        assert_eq!(m.try_exec(), Err("3 is odd".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn incoming_failure_skips_the_whole_chain() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let m = unit(8).bind(move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            half(n)
        });

        assert_eq!(m.run(Some("earlier".into())), Err("earlier".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn bind_all_runs_runtime_sequence() {
        let steps: Vec<Step<i64, String>> =
            vec![step(half), step(half), step(|n: i64| unit(n * 10))];
        assert_eq!(unit(12).bind_all(steps.clone()).try_exec(), Ok(30));
        assert_eq!(
            unit(6).bind_all(steps).try_exec(),
            Err("3 is odd".to_string())
        );
    }

    #[test]
    fn fail_keeps_the_earliest_failure() {
        let m: Monad<i64, String> = Monad::fail("late".into());
        assert_eq!(m.run(None), Err("late".to_string()));
        assert_eq!(m.run(Some("early".into())), Err("early".to_string()));
    }

    #[test]
    fn exec_transfers_to_enclosing_boundary() {
        let m = unit(7).bind(half);
        let outcome = panic_to_pair(|| exec(&m));
        assert_eq!(outcome.unwrap_err().to_string(), "7 is odd");

        let ok = unit(8).bind(half);
        assert_eq!(panic_to_pair(|| ok.exec()).unwrap(), 4);
    }
}
