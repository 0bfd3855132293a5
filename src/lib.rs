//! Automated participation bot for an on-chain lottery promotion.
//!
//! The bot authenticates a wallet against the lottery service through a
//! challenge/response signature exchange, then runs draws in concurrent
//! batches. Each draw asks the service for an unsigned transaction,
//! signs and broadcasts it, registers the confirmed signature as a draw
//! entry, and polls for the recorded winner.

// Service API
pub mod api;

// Chain integration
pub mod blockchain;

// Cross-cutting concerns
pub mod config;
pub mod observability;

// Draw execution
pub mod draws;

pub use api::session::{SessionHandle, SessionToken};
pub use config::schema::BotConfig;
pub use draws::orchestrator::Orchestrator;
pub use draws::types::RunSummary;
