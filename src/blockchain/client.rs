//! Chain RPC client construction and queries.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use std::time::Duration;

use crate::blockchain::types::{ChainError, ChainResult};
use crate::config::schema::ChainConfig;

/// RPC client wrapper pinned to confirmed commitment.
#[derive(Clone)]
pub struct ChainClient {
    rpc: Arc<RpcClient>,
    rpc_url: String,
}

impl ChainClient {
    /// Connect to the configured RPC endpoint.
    pub fn new(config: &ChainConfig) -> Self {
        let rpc = RpcClient::new_with_timeout_and_commitment(
            config.rpc_url.clone(),
            Duration::from_secs(config.rpc_timeout_secs),
            CommitmentConfig::confirmed(),
        );
        tracing::info!(rpc_url = %config.rpc_url, "Chain client initialized");
        Self {
            rpc: Arc::new(rpc),
            rpc_url: config.rpc_url.clone(),
        }
    }

    /// The underlying RPC client.
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Wallet balance in lamports.
    pub async fn balance(&self, pubkey: &Pubkey) -> ChainResult<u64> {
        self.rpc
            .get_balance(pubkey)
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("rpc_url", &self.rpc_url)
            .finish()
    }
}
