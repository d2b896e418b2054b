#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use stepwise_core::Failure;

/// A chain of counting steps where each step adds its index to the input,
/// and the step at `fail_at` (if any) fails instead.
#[derive(Clone)]
pub struct CountingChain {
    calls: Arc<Vec<AtomicUsize>>,
    fail_at: Option<usize>,
}

impl CountingChain {
    pub fn new(len: usize, fail_at: Option<usize>) -> Self {
        let calls = (0..len).map(|_| AtomicUsize::new(0)).collect();
        Self {
            calls: Arc::new(calls),
            fail_at,
        }
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// The fallible function for step `index`
    pub fn step(
        &self,
        index: usize,
    ) -> impl Fn(i64) -> Result<i64, Failure> + Send + Sync + 'static {
        let chain = self.clone();
        move |value| {
            chain.calls[index].fetch_add(1, Ordering::SeqCst);
            if chain.fail_at == Some(index) {
                Err(Failure::step(
                    format!("step-{index}"),
                    format!("rejected {value}"),
                ))
            } else {
                Ok(value + index as i64 + 1)
            }
        }
    }

    pub fn calls(&self, index: usize) -> usize {
        self.calls[index].load(Ordering::SeqCst)
    }

    /// Asserts steps up to the failure ran once and every later step never ran
    pub fn assert_short_circuited(&self) {
        let last_run = self.fail_at.unwrap_or(self.len() - 1);
        for index in 0..self.len() {
            let expected = usize::from(index <= last_run);
            assert_eq!(
                self.calls(index),
                expected,
                "step {index} ran {} times, expected {expected}",
                self.calls(index)
            );
        }
    }
}

/// Collapse a failure to comparable text
pub fn render<T>(outcome: Result<T, Failure>) -> Result<T, String> {
    outcome.map_err(|failure| failure.to_string())
}
