//! Pipelines assembled from step names at runtime

use stepwise_core::functional::monad::Monad;
use stepwise_core::Result;
use stepwise_utils::steps::{self, Payload};
use stepwise_utils::tracing::{pipeline_finished, pipeline_span};

pub fn execute(input: String, names: Vec<String>, json: bool) -> Result<()> {
    let pipeline = steps::parse_pipeline(names.as_slice())?;

    let span = pipeline_span("monad", pipeline.len());
    let _enter = span.enter();

    let outcome = Monad::unit(Payload::Text(input))
        .bind_all(pipeline)
        .try_exec();
    pipeline_finished("monad", outcome.is_ok());

    let payload = outcome?;
    if json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{payload}");
    }
    Ok(())
}
