//! Structured logging setup: `EnvFilter` plus a compact or JSON formatter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize structured logging.
///
/// `RUST_LOG` wins over `logging.filter`. With `logging.json` set, events are
/// emitted as JSON lines; otherwise in the compact text format.
pub fn init(config: &LoggingConfig) {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let json_layer = config
        .json
        .then(|| fmt::layer().json().with_target(true).with_current_span(false));
    let text_layer = (!config.json).then(|| {
        fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .compact()
    });

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(json_layer)
        .with(text_layer)
        .init();
}
