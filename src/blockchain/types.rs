//! Chain error definitions.

use thiserror::Error;

/// Errors raised preparing or broadcasting transactions.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Invalid signing key material.
    #[error("Wallet error: {0}")]
    Keypair(String),

    /// The unsigned payload could not be decoded.
    #[error("Transaction decode error: {0}")]
    Decode(String),

    /// Local signing failed.
    #[error("Signing error: {0}")]
    Sign(String),

    /// Broadcast or confirmation failed.
    #[error("Transaction not confirmed: {0}")]
    Confirmation(String),

    /// The network reported success without a usable signature.
    #[error("No signature returned for transaction")]
    MissingSignature,

    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;
