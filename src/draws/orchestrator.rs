//! Batch orchestration for lottery draws.
//!
//! # Responsibilities
//! - Partition the requested draw count into fixed-size batches
//! - Dispatch each batch's draws concurrently and wait for all of them
//! - Refresh the session once per batch when dispatches hit a stale
//!   token, then run one replacement per affected draw
//! - Pause between batches and log the final summary
//!
//! # Design Decisions
//! - Draws share one task; concurrency comes from joining their
//!   futures, not from spawning
//! - A replacement attempt is final; its outcome overwrites the stale
//!   report for the same draw index
//! - Per-draw failures only ever reach the summary, never abort the run

use futures_util::future::join_all;
use std::sync::Arc;
use tokio::time::sleep;

use crate::api::lottery::LotteryClient;
use crate::api::session::SessionHandle;
use crate::blockchain::transaction::SubmitLotteryTx;
use crate::config::schema::DrawsConfig;
use crate::draws::sequence::DrawSequence;
use crate::draws::types::RunSummary;

/// Lenient draw-count parsing: anything unparseable falls back to one
/// draw.
pub fn parse_draw_count(input: &str) -> u32 {
    input.trim().parse().unwrap_or(1)
}

/// 1-based inclusive (start, end) draw indices for each batch.
fn batch_bounds(total: u32, batch_size: u32) -> Vec<(u32, u32)> {
    let batches = total.div_ceil(batch_size);
    (0..batches)
        .map(|batch| {
            let start = batch * batch_size + 1;
            let end = (start + batch_size - 1).min(total);
            (start, end)
        })
        .collect()
}

/// Runs draws in concurrent batches against one session.
pub struct Orchestrator<S> {
    sequence: DrawSequence<S>,
    session: Arc<SessionHandle>,
    config: DrawsConfig,
}

impl<S: SubmitLotteryTx> Orchestrator<S> {
    pub fn new(
        lottery: LotteryClient,
        submitter: S,
        session: Arc<SessionHandle>,
        config: DrawsConfig,
    ) -> Self {
        Self {
            sequence: DrawSequence::new(lottery, submitter, session.clone(), config.clone()),
            session,
            config,
        }
    }

    /// Run `total` draws to completion. Individual failures become
    /// reports; only the summary reflects them.
    pub async fn run(&self, total: u32) -> RunSummary {
        let bounds = batch_bounds(total, self.config.batch_size);
        let batches = bounds.len() as u32;
        tracing::info!(
            draws = total,
            batch_size = self.config.batch_size,
            batches,
            "Starting lottery participation"
        );

        let mut summary = RunSummary {
            requested: total,
            batches,
            ..RunSummary::default()
        };

        for (batch, (start, end)) in bounds.iter().copied().enumerate() {
            tracing::info!(
                batch = batch + 1,
                batches,
                draws = end - start + 1,
                "Dispatching batch"
            );

            let token = self.session.current();
            let mut reports = join_all(
                (start..=end).map(|index| self.sequence.run(index, total, token.clone())),
            )
            .await;

            // Draws rejected at dispatch get one replacement after a
            // single refresh; failures past build-tx do not.
            let stale: Vec<u32> = reports
                .iter()
                .filter(|report| report.is_stale_token())
                .map(|report| report.index)
                .collect();
            if !stale.is_empty() {
                tracing::warn!(draws = ?stale, "Session token was stale at dispatch, refreshing");
                match self.session.refresh().await {
                    Ok(fresh) => {
                        let replacements = join_all(
                            stale
                                .iter()
                                .map(|&index| self.sequence.run(index, total, fresh.clone())),
                        )
                        .await;
                        for replacement in replacements {
                            if let Some(slot) =
                                reports.iter_mut().find(|r| r.index == replacement.index)
                            {
                                *slot = replacement;
                            }
                        }
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "Session refresh failed, keeping original failures");
                    }
                }
            }

            for report in &reports {
                if report.succeeded() {
                    summary.succeeded += 1;
                } else {
                    summary.failed += 1;
                }
                tracing::info!("{}", report.render());
            }

            if (batch as u32) + 1 < batches {
                tracing::info!(
                    delay_secs = self.config.batch_delay_secs,
                    "Waiting before next batch"
                );
                sleep(self.config.batch_delay()).await;
            }
        }

        tracing::info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            batches = summary.batches,
            "Lottery participation complete"
        );
        summary
    }
}
