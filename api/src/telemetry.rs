//! Tracing subscriber setup for the binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pd_shared::config::LoggingConfig;

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the configured level. JSON output is
/// used when the logging config asks for it, human-readable text otherwise.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let json_layer = config.is_json().then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_file(config.source_location)
            .with_line_number(config.source_location)
    });
    let text_layer = (!config.is_json()).then(|| {
        tracing_subscriber::fmt::layer()
            .with_file(config.source_location)
            .with_line_number(config.source_location)
    });

    // A second init (tests, repeated binaries in one process) is not an error
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init();
}
