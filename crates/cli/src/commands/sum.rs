//! Parse and add integers, stopping at the first bad argument

use super::Style;
use stepwise_core::functional::func::{boxed, FuncErr};
use stepwise_core::functional::prelude::*;
use stepwise_core::{Failure, Result};
use stepwise_utils::ops;
use stepwise_utils::tracing::{pipeline_finished, pipeline_span};

pub fn execute(values: Vec<String>, style: Style) -> Result<()> {
    let span = pipeline_span(style.as_str(), values.len());
    let _enter = span.enter();

    let outcome = sum(values, style);
    pipeline_finished(style.as_str(), outcome.is_ok());

    println!("{}", outcome?);
    Ok(())
}

fn add(total: i64, text: String) -> Result<i64> {
    let n = ops::parse_int(text)?;
    total
        .checked_add(n)
        .ok_or_else(|| Failure::step("sum", format!("{total} + {n} overflows")))
}

pub fn sum(values: Vec<String>, style: Style) -> Result<i64> {
    match style {
        Style::Compose => {
            let seed: FuncErr<i64, i64> = boxed(Ok::<i64, Failure>);
            let pipeline = values.into_iter().fold(seed, |acc, text| {
                boxed(compose2(acc, move |total: i64| add(total, text.clone())))
            });
            pipeline(0)
        }
        Style::Monad => {
            let steps: Vec<Step<i64>> = values
                .into_iter()
                .map(|text| {
                    step(move |total: i64| {
                        let text = text.clone();
                        Monad::lift(move || add(total, text.clone()))
                    })
                })
                .collect();
            unit(0).bind_all(steps).try_exec()
        }
        Style::Bridge => panic_to_pair(|| {
            values
                .into_iter()
                .fold(0, |total, text| panic_if_error(add(total, text)))
        }),
    }
}
