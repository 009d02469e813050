//! Tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pv_shared::config::{LogFormat, LoggingConfig};

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let json_layer = matches!(config.format, LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_file(config.source_location)
            .with_line_number(config.source_location)
    });
    let pretty_layer = matches!(config.format, LogFormat::Pretty).then(|| {
        tracing_subscriber::fmt::layer()
            .pretty()
            .with_ansi(config.colored)
    });
    let compact_layer = matches!(config.format, LogFormat::Compact).then(|| {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(config.colored)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .with(compact_layer)
        .try_init()?;

    Ok(())
}
