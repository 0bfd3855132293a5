//! Challenge/response authentication against the lottery service.
//!
//! # Data Flow
//! ```text
//! GET  /auth/sonic/challenge?wallet=<address>   → challenge string
//! sign challenge bytes with the wallet key      → detached signature
//! POST /auth/sonic/authorize                    → session token
//! ```
//!
//! # Security
//! - The signature proves key possession; the key itself never leaves
//!   the process
//! - Tokens are never written to logs

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::api::client::ApiClient;
use crate::api::session::SessionToken;
use crate::api::types::{ApiError, Envelope};
use crate::blockchain::wallet::Wallet;

const CHALLENGE_PATH: &str = "/auth/sonic/challenge";
const AUTHORIZE_PATH: &str = "/auth/sonic/authorize";

/// Errors raised while obtaining a session token.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Challenge request failed: {0}")]
    Challenge(#[source] ApiError),

    #[error("Authorize request failed: {0}")]
    Authorize(#[source] ApiError),

    #[error("Authorize response did not include a token")]
    MissingToken,

    #[error("No signing credential available to refresh the session")]
    MissingCredential,
}

#[derive(Debug, Serialize)]
struct AuthorizeRequest {
    address: String,
    address_encoded: String,
    signature: String,
}

#[derive(Debug, Deserialize)]
struct AuthorizeData {
    token: Option<String>,
}

/// Obtains session tokens by signing service challenges.
pub struct Authenticator {
    api: Arc<ApiClient>,
    wallet: Arc<Wallet>,
}

impl Authenticator {
    pub fn new(api: Arc<ApiClient>, wallet: Arc<Wallet>) -> Self {
        Self { api, wallet }
    }

    /// Perform the full challenge/response exchange.
    pub async fn authenticate(&self) -> Result<SessionToken, AuthError> {
        let address = self.wallet.address();
        let challenge: Envelope<String> = self
            .api
            .get_json(CHALLENGE_PATH, Some(&[("wallet", address.clone())]), None)
            .await
            .map_err(AuthError::Challenge)?;

        let signature = self.wallet.sign_message(challenge.data.as_bytes());
        let request = AuthorizeRequest {
            address,
            address_encoded: STANDARD.encode(self.wallet.address_bytes()),
            signature: STANDARD.encode(signature),
        };

        let authorized: Envelope<AuthorizeData> = self
            .api
            .post_json(AUTHORIZE_PATH, &request, None)
            .await
            .map_err(AuthError::Authorize)?;

        let token = authorized.data.token.ok_or(AuthError::MissingToken)?;
        tracing::info!(wallet = %self.wallet.short_address(), "Session token obtained");
        Ok(SessionToken::new(token))
    }
}
