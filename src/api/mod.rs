//! Lottery service API subsystem.
//!
//! # Data Flow
//! ```text
//! headers.rs (browser profile)
//!     → client.rs (shared reqwest client, status → error mapping)
//!         → auth.rs (challenge/response signature exchange)
//!             → session.rs (token holder, refresh on demand)
//!         → lottery.rs (build-tx, draw registration, winner lookup)
//! ```
//!
//! # Design Decisions
//! - One reqwest client per process; endpoints are thin wrappers on it
//! - Authorization failures are a distinct error variant so callers can
//!   drive token refresh without matching on status codes

pub mod auth;
pub mod client;
pub mod headers;
pub mod lottery;
pub mod session;
pub mod types;

pub use auth::{AuthError, Authenticator};
pub use client::ApiClient;
pub use lottery::{DrawEntry, DrawOutcome, LotteryClient, UnsignedLotteryTx};
pub use session::{SessionHandle, SessionToken};
pub use types::{ApiError, ApiResult, Envelope};
