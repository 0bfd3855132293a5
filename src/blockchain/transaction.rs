//! Transaction signing, broadcast, and confirmation.
//!
//! # Responsibilities
//! - Decode the unsigned payload prepared by the service
//! - Attach the wallet's signature without disturbing any co-signature
//!   already on the transaction
//! - Broadcast and wait for confirmation
//! - Retry exactly once when the validity window expired mid-flight

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use solana_client::client_error::ClientError;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::{Transaction, TransactionError};
use std::future::Future;
use std::sync::Arc;

use crate::api::lottery::UnsignedLotteryTx;
use crate::blockchain::client::ChainClient;
use crate::blockchain::types::{ChainError, ChainResult};
use crate::blockchain::wallet::Wallet;

/// Broadcasts one prepared lottery transaction.
///
/// The draw sequence depends on this seam; tests substitute a scripted
/// implementation.
pub trait SubmitLotteryTx {
    /// Sign and broadcast, returning the confirmed signature in base58.
    fn submit(&self, tx: &UnsignedLotteryTx) -> impl Future<Output = ChainResult<String>>;
}

/// Signs and broadcasts lottery transactions over RPC.
pub struct TxSubmitter {
    chain: ChainClient,
    wallet: Arc<Wallet>,
}

impl TxSubmitter {
    pub fn new(chain: ChainClient, wallet: Arc<Wallet>) -> Self {
        Self { chain, wallet }
    }

    /// Decode the payload and attach the wallet's signature.
    ///
    /// Signing against the blockhash already in the message keeps any
    /// signature the service applied before handing the payload out.
    fn prepare(&self, tx: &UnsignedLotteryTx) -> ChainResult<Transaction> {
        let bytes = STANDARD
            .decode(tx.as_base64())
            .map_err(|e| ChainError::Decode(format!("payload is not valid base64: {}", e)))?;
        let mut transaction: Transaction = bincode::deserialize(&bytes)
            .map_err(|e| ChainError::Decode(format!("payload is not a transaction: {}", e)))?;
        let blockhash = transaction.message.recent_blockhash;
        transaction
            .try_partial_sign(&[self.wallet.keypair()], blockhash)
            .map_err(|e| ChainError::Sign(e.to_string()))?;
        Ok(transaction)
    }
}

impl SubmitLotteryTx for TxSubmitter {
    async fn submit(&self, tx: &UnsignedLotteryTx) -> ChainResult<String> {
        let signed = self.prepare(tx)?;
        let rpc = self.chain.rpc();
        let signed_ref = &signed;
        let signature =
            send_with_expiry_retry(move || rpc.send_and_confirm_transaction(signed_ref)).await?;
        if signature == Signature::default() {
            return Err(ChainError::MissingSignature);
        }
        Ok(signature.to_string())
    }
}

/// Broadcast with a single retry reserved for validity-window expiry.
///
/// Any other failure surfaces immediately, and so does a second expiry.
pub(crate) async fn send_with_expiry_retry<F, Fut>(mut send: F) -> ChainResult<Signature>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Signature, ClientError>>,
{
    match send().await {
        Ok(signature) => Ok(signature),
        Err(err) if is_validity_window_expiry(&err) => {
            tracing::warn!(error = %err, "Transaction validity window expired, retrying broadcast");
            send()
                .await
                .map_err(|retry_err| ChainError::Confirmation(retry_err.to_string()))
        }
        Err(err) => Err(ChainError::Confirmation(err.to_string())),
    }
}

/// True when a broadcast failed because the transaction's block-height
/// window elapsed before confirmation.
pub(crate) fn is_validity_window_expiry(err: &ClientError) -> bool {
    if err.get_transaction_error() == Some(TransactionError::BlockhashNotFound) {
        return true;
    }
    let message = err.to_string();
    message.contains("block height exceeded") || message.contains("transaction expiration")
}
