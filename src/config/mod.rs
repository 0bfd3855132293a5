//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks, all errors collected)
//!     → BotConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - Every field has a default, so running without a config file works
//! - Syntactic validation is serde's job, semantic validation lives in
//!   `validation.rs`

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{BotConfig, ChainConfig, DrawsConfig, ObservabilityConfig, ServiceConfig};
pub use validation::{validate_config, ValidationError};
