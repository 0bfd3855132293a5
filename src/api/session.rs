//! Session token holder shared by concurrent draws.
//!
//! # Design Decisions
//! - Draws capture an `Arc` snapshot of the token at dispatch time; a
//!   refresh publishes a new value for draws dispatched afterwards and
//!   never changes a snapshot already handed out
//! - Refreshing without a configured authenticator fails the same way a
//!   missing credential does

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::api::auth::{AuthError, Authenticator};

/// Opaque bearer credential for the lottery service.
///
/// Sent verbatim as the `Authorization` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Shared holder for the current session token.
pub struct SessionHandle {
    token: ArcSwap<SessionToken>,
    refresher: Option<Arc<Authenticator>>,
}

impl SessionHandle {
    /// Wrap an already-obtained token.
    ///
    /// Without a refresher, any refresh attempt reports a missing
    /// credential.
    pub fn new(initial: SessionToken, refresher: Option<Arc<Authenticator>>) -> Self {
        Self {
            token: ArcSwap::from_pointee(initial),
            refresher,
        }
    }

    /// Snapshot of the current token.
    pub fn current(&self) -> Arc<SessionToken> {
        self.token.load_full()
    }

    /// Re-authenticate and publish the new token, returning it.
    pub async fn refresh(&self) -> Result<Arc<SessionToken>, AuthError> {
        let refresher = self.refresher.as_ref().ok_or(AuthError::MissingCredential)?;
        let fresh = Arc::new(refresher.authenticate().await?);
        self.token.store(fresh.clone());
        tracing::info!("Session token refreshed");
        Ok(fresh)
    }
}
