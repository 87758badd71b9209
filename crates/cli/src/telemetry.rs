//! Logging setup for the command line.
//!
//! Priority: `RUST_LOG` env var > configured level. Logs go to stderr so
//! that stdout only carries rendered results.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry_with_level(log_level: &str) {
    let default_filter = format!(
        "{log_level},tradecmp_core={log_level},tradecmp_cli={log_level}"
    );

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .ok();
}
