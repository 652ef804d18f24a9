/*!
 * Tracing
 * Structured logging for simulation runs using the tracing crate
 *
 * Logs go to stderr so that reports on stdout stay machine-readable.
 */

use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Environment variable enabling JSON log output
pub const TRACE_JSON_VAR: &str = "DISPATCH_TRACE_JSON";

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - DISPATCH_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var(TRACE_JSON_VAR)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}
