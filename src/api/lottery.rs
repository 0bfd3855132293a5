//! Lottery endpoints: transaction building, draw registration, and
//! winner lookup.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::session::SessionToken;
use crate::api::types::{ApiError, ApiResult, Envelope};

const BUILD_TX_PATH: &str = "/user/lottery/build-tx";
const DRAW_PATH: &str = "/user/lottery/draw";
const WINNER_PATH: &str = "/user/lottery/draw/winner";

/// Base64-encoded unsigned transaction prepared by the service.
#[derive(Debug, Clone)]
pub struct UnsignedLotteryTx(String);

impl UnsignedLotteryTx {
    pub fn new(payload: impl Into<String>) -> Self {
        Self(payload.into())
    }

    pub fn as_base64(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
struct BuildTxData {
    hash: Option<String>,
}

#[derive(Debug, Serialize)]
struct DrawRequest<'a> {
    hash: &'a str,
}

/// A registered draw entry; `block_number` keys the winner lookup.
#[derive(Debug, Clone)]
pub struct DrawEntry {
    pub block_number: u64,
    pub raw: Value,
}

/// Outcome of a draw. Pending until a winner is recorded.
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    pub winner: Option<String>,
    pub raw: Value,
}

impl DrawOutcome {
    pub fn is_pending(&self) -> bool {
        self.winner.is_none()
    }
}

/// Client for the lottery endpoints.
#[derive(Clone)]
pub struct LotteryClient {
    api: Arc<ApiClient>,
}

impl LotteryClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Request an unsigned lottery transaction for this session.
    pub async fn build_tx(&self, token: &SessionToken) -> ApiResult<UnsignedLotteryTx> {
        let response: Envelope<BuildTxData> =
            self.api.get_json(BUILD_TX_PATH, None, Some(token)).await?;
        let hash = response.data.hash.ok_or(ApiError::MissingField {
            endpoint: BUILD_TX_PATH,
            field: "hash",
        })?;
        Ok(UnsignedLotteryTx::new(hash))
    }

    /// Register a confirmed transaction signature as a draw entry.
    pub async fn register_draw(
        &self,
        token: &SessionToken,
        tx_signature: &str,
    ) -> ApiResult<DrawEntry> {
        let response: Envelope<Value> = self
            .api
            .post_json(DRAW_PATH, &DrawRequest { hash: tx_signature }, Some(token))
            .await?;
        let block_number = response
            .data
            .get("block_number")
            .and_then(Value::as_u64)
            .ok_or(ApiError::MissingField {
                endpoint: DRAW_PATH,
                field: "block_number",
            })?;
        Ok(DrawEntry {
            block_number,
            raw: response.data,
        })
    }

    /// Fetch the outcome recorded for a block.
    pub async fn draw_result(
        &self,
        token: &SessionToken,
        block_number: u64,
    ) -> ApiResult<DrawOutcome> {
        let query = [("block_number", block_number.to_string())];
        let response: Envelope<Value> = self
            .api
            .get_json(WINNER_PATH, Some(&query), Some(token))
            .await?;
        let winner = response
            .data
            .get("winner")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(DrawOutcome {
            winner,
            raw: response.data,
        })
    }
}
