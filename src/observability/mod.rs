//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; network phases log key=value
//!   fields rather than interpolated strings
//! - `RUST_LOG` overrides the configured default level
//! - Timestamps come from the fmt layer, so log lines double as the
//!   run's progress record

pub mod logging;
