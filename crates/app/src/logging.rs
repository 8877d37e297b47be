//! Diagnostics for the desktop binary.
//!
//! Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr in the
//! compact format so it never mixes with anything the window prints.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// ```bash
/// RUST_LOG=services=debug,network=debug cargo run -p app
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
