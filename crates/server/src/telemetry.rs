use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up the tracing subscriber for server-side logs.
///
/// Reads `RUST_LOG` for the filter (default `info`). Uses `try_init` so a
/// subscriber already installed by the serving harness wins without
/// panicking.
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}
