//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML config
//! files. Every field has a default, so a missing config file means a
//! default run.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the lottery bot.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BotConfig {
    /// Lottery service API settings.
    pub service: ServiceConfig,

    /// Chain RPC settings.
    pub chain: ChainConfig,

    /// Draw batching and result polling behavior.
    pub draws: DrawsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Lottery service API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the lottery service.
    pub base_url: String,

    /// Total per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://odyssey-api-beta.sonic.game".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Chain RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://devnet.sonic.game".to_string(),
            rpc_timeout_secs: 60,
        }
    }
}

/// Draw batching and result polling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DrawsConfig {
    /// Maximum draws dispatched concurrently per batch.
    pub batch_size: u32,

    /// Pause between consecutive batches, in seconds.
    pub batch_delay_secs: u64,

    /// Wait before re-querying a pending draw result, in seconds.
    pub poll_retry_delay_secs: u64,

    /// How many times a pending result is re-queried.
    pub poll_retries: u32,

    /// Pause after each completed draw, in milliseconds.
    pub settle_delay_ms: u64,
}

impl DrawsConfig {
    pub fn batch_delay(&self) -> Duration {
        Duration::from_secs(self.batch_delay_secs)
    }

    pub fn poll_retry_delay(&self) -> Duration {
        Duration::from_secs(self.poll_retry_delay_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for DrawsConfig {
    fn default() -> Self {
        Self {
            batch_size: 50,
            batch_delay_secs: 59,
            poll_retry_delay_secs: 5,
            poll_retries: 1,
            settle_delay_ms: 1000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log level when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
