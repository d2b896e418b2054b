//! read → utf8 → base64 → json, in any of the three styles

use super::Style;
use serde_json::Value;
use std::path::PathBuf;
use stepwise_core::functional::prelude::*;
use stepwise_core::Result;
use stepwise_utils::ops;
use stepwise_utils::tracing::{pipeline_finished, pipeline_span};

pub fn execute(file: PathBuf, style: Style) -> Result<()> {
    let span = pipeline_span(style.as_str(), 4);
    let _enter = span.enter();

    let outcome = decode(file, style);
    pipeline_finished(style.as_str(), outcome.is_ok());

    println!("{:#}", outcome?);
    Ok(())
}

pub fn decode(file: PathBuf, style: Style) -> Result<Value> {
    match style {
        Style::Compose => compose4(
            ops::read_file,
            ops::bytes_to_str,
            ops::base64_decode,
            ops::json_value,
        )(file),
        Style::Monad => unit(file)
            .bind(|path: PathBuf| Monad::lift(move || ops::read_file(path.clone())))
            .bind(|bytes: Vec<u8>| Monad::lift(move || ops::bytes_to_str(bytes.clone())))
            .bind(|text: String| Monad::lift(move || ops::base64_decode(text.clone())))
            .bind(|decoded: Vec<u8>| Monad::lift(move || ops::json_value(decoded.clone())))
            .try_exec(),
        Style::Bridge => {
            let read = wrap_to_panic(ops::read_file);
            let to_str = wrap_to_panic(ops::bytes_to_str);
            let base64 = wrap_to_panic(ops::base64_decode);
            let json = wrap_to_panic(ops::json_value);

            panic_to_pair(|| {
                let bytes = read(file);
                let text = to_str(bytes);
                let decoded = base64(text);
                json(decoded)
            })
        }
    }
}
