//! Chain integration subsystem.
//!
//! # Data Flow
//! ```text
//! wallet.rs (key loading, challenge signing)
//!     → transaction.rs (decode payload → partial sign → broadcast)
//!         → client.rs (RPC connection, confirmed commitment)
//! ```
//!
//! # Security Constraints
//! - Private keys come from the environment and stay in memory
//! - The service's unsigned payload is decoded and signed locally; the
//!   key is never sent anywhere
//! - Signing reuses the blockhash already in the message so a service
//!   co-signature survives

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use transaction::{SubmitLotteryTx, TxSubmitter};
pub use types::{ChainError, ChainResult};
pub use wallet::Wallet;
