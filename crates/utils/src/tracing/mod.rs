use stepwise_core::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Initialize the tracing system
///
/// An explicit `filter` wins over `RUST_LOG`; with neither, only warnings and
/// errors are shown. Events go to stderr so stdout stays free for results.
pub fn init(
    filter: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = build_filter(filter)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Resolve the filter directives: explicit, then `RUST_LOG`, then the default
pub fn build_filter(explicit: Option<&str>) -> Result<EnvFilter, ParseError> {
    match explicit {
        Some(directives) => EnvFilter::try_new(directives),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))),
    }
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create a span for one pipeline run
pub fn pipeline_span(style: &str, steps: usize) -> Span {
    span!(Level::INFO, "pipeline", style = %style, steps = %steps)
}

/// Emit a structured event for pipeline completion
pub fn pipeline_finished(style: &str, success: bool) {
    if success {
        info!(style = %style, "pipeline_completed");
    } else {
        warn!(style = %style, "pipeline_failed");
    }
}
