//! One complete draw: build, sign and broadcast, register, poll.

use std::sync::Arc;
use tokio::time::sleep;

use crate::api::lottery::{DrawEntry, DrawOutcome, LotteryClient};
use crate::api::session::{SessionHandle, SessionToken};
use crate::blockchain::transaction::SubmitLotteryTx;
use crate::config::schema::DrawsConfig;
use crate::draws::types::{DrawError, DrawReport};

/// Executes complete draws against the service and the chain.
pub struct DrawSequence<S> {
    lottery: LotteryClient,
    submitter: S,
    session: Arc<SessionHandle>,
    config: DrawsConfig,
}

impl<S: SubmitLotteryTx> DrawSequence<S> {
    pub fn new(
        lottery: LotteryClient,
        submitter: S,
        session: Arc<SessionHandle>,
        config: DrawsConfig,
    ) -> Self {
        Self {
            lottery,
            submitter,
            session,
            config,
        }
    }

    /// Run one draw to completion, converting any failure into the
    /// report. `token` is the snapshot captured at dispatch; a refresh
    /// elsewhere never changes it mid-draw.
    pub async fn run(&self, index: u32, total: u32, token: Arc<SessionToken>) -> DrawReport {
        let result = self.attempt(index, total, &token).await;
        if let Err(err) = &result {
            tracing::warn!(draw = index, error = %err, "Draw failed");
        }
        DrawReport { index, result }
    }

    async fn attempt(
        &self,
        index: u32,
        total: u32,
        token: &SessionToken,
    ) -> Result<DrawOutcome, DrawError> {
        tracing::info!(draw = index, total, "Building lottery transaction");
        let unsigned = self.lottery.build_tx(token).await.map_err(DrawError::Build)?;

        let signature = self.submitter.submit(&unsigned).await?;
        tracing::info!(draw = index, signature = %abbreviate(&signature), "Transaction confirmed");

        let entry = self.participate(token, &signature).await?;
        tracing::info!(
            draw = index,
            block_number = entry.block_number,
            entry = %entry.raw,
            "Draw entry registered"
        );

        let outcome = self.poll_result(token, entry.block_number).await?;
        match &outcome.winner {
            Some(winner) => tracing::info!(draw = index, winner = %winner, "Draw settled"),
            None => tracing::info!(draw = index, "Draw left pending"),
        }

        sleep(self.config.settle_delay()).await;
        Ok(outcome)
    }

    /// Register the entry, refreshing the session once if the token was
    /// rejected. The retried call is final either way.
    async fn participate(
        &self,
        token: &SessionToken,
        tx_signature: &str,
    ) -> Result<DrawEntry, DrawError> {
        match self.lottery.register_draw(token, tx_signature).await {
            Ok(entry) => Ok(entry),
            Err(err) if err.is_unauthorized() => {
                tracing::warn!("Session token rejected, refreshing and retrying once");
                let fresh = self.session.refresh().await?;
                self.lottery
                    .register_draw(&fresh, tx_signature)
                    .await
                    .map_err(DrawError::Participation)
            }
            Err(err) => Err(DrawError::Participation(err)),
        }
    }

    /// Fetch the outcome; a pending result is re-queried after a delay,
    /// at most `poll_retries` times. The last answer stands, pending or
    /// settled. Transport failures are never retried here.
    async fn poll_result(
        &self,
        token: &SessionToken,
        block_number: u64,
    ) -> Result<DrawOutcome, DrawError> {
        let mut outcome = self
            .lottery
            .draw_result(token, block_number)
            .await
            .map_err(DrawError::Poll)?;
        let mut remaining = self.config.poll_retries;
        while outcome.is_pending() && remaining > 0 {
            tracing::info!(
                block_number,
                delay_secs = self.config.poll_retry_delay_secs,
                "No winner recorded yet, polling again"
            );
            sleep(self.config.poll_retry_delay()).await;
            outcome = self
                .lottery
                .draw_result(token, block_number)
                .await
                .map_err(DrawError::Poll)?;
            remaining -= 1;
        }
        Ok(outcome)
    }
}

fn abbreviate(value: &str) -> String {
    if value.len() <= 16 {
        value.to_string()
    } else {
        format!("{}...{}", &value[..8], &value[value.len() - 8..])
    }
}
