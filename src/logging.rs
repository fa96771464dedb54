// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive, e.g. `country_table_usecase=debug`.
pub const LOG_ENV: &str = "COUNTRY_TABLE_LOG";

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the stderr subscriber. The environment variable wins over `-v` flags.
///
/// Calling it twice is harmless; the second install is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
