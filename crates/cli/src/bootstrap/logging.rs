use ferrous_lookup_domain::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the diagnostics subscriber. Output goes to stderr so stdout only
/// carries answer lines and trace output.
///
/// `RUST_LOG` takes precedence over the configured level, e.g.
///   RUST_LOG=ferrous_lookup_infrastructure=debug
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.json {
        builder.json().try_init().ok();
    } else {
        builder.without_time().try_init().ok();
    }
}
