//! Wallet management and message signing.
//!
//! # Responsibilities
//! - Load the signing key from the environment
//! - Expose the address in the encodings the service expects
//! - Produce detached signatures for authentication challenges
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables
//! - Keys are never logged or serialized
//! - Log lines show an abbreviated address, never key material

use std::fmt;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};

use crate::blockchain::types::{ChainError, ChainResult};

/// Environment variable holding the base58-encoded private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "RING_LOTTERY_PRIVATE_KEY";

/// Signing wallet for lottery participation.
pub struct Wallet {
    keypair: Keypair,
}

impl Wallet {
    /// Create a wallet from a base58-encoded ed25519 secret key.
    pub fn from_base58(secret: &str) -> ChainResult<Self> {
        let bytes = bs58::decode(secret.trim())
            .into_vec()
            .map_err(|e| ChainError::Keypair(format!("invalid base58 secret key: {}", e)))?;
        let keypair = Keypair::from_bytes(&bytes)
            .map_err(|e| ChainError::Keypair(format!("invalid secret key bytes: {}", e)))?;
        Ok(Self { keypair })
    }

    /// Load the wallet from [`PRIVATE_KEY_ENV_VAR`].
    pub fn from_env() -> ChainResult<Self> {
        let secret = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|_| {
            ChainError::Keypair(format!("environment variable {} not set", PRIVATE_KEY_ENV_VAR))
        })?;
        Self::from_base58(&secret)
    }

    /// The wallet's public key.
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Base58 address string.
    pub fn address(&self) -> String {
        self.keypair.pubkey().to_string()
    }

    /// Raw public key bytes.
    pub fn address_bytes(&self) -> [u8; 32] {
        self.keypair.pubkey().to_bytes()
    }

    /// Abbreviated address for log lines.
    pub fn short_address(&self) -> String {
        let address = self.address();
        format!("{}...{}", &address[..8], &address[address.len() - 8..])
    }

    /// Detached ed25519 signature over arbitrary bytes.
    pub fn sign_message(&self, message: &[u8]) -> Signature {
        self.keypair.sign_message(message)
    }

    pub(crate) fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

// Manual impl: deriving would delegate to `Keypair`, whose debug output
// includes the secret key bytes.
impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
