use tracing_subscriber::EnvFilter;
use zonecheck_domain::config::{LogFormat, LoggingConfig};

/// `RUST_LOG` wins over `logging.level` (which already carries `--log-level`).
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
