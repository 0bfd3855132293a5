//! Structured logging setup.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Apply the configured default level, overridable via `RUST_LOG`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `default_level` applies to this crate's targets when `RUST_LOG` is
/// not set.
pub fn init(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("ring_lottery={default_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
