//! Draw-level error taxonomy and reporting.

use thiserror::Error;

use crate::api::auth::AuthError;
use crate::api::lottery::DrawOutcome;
use crate::api::types::ApiError;
use crate::blockchain::types::ChainError;

/// Fixed trailer appended to every rendered draw report.
pub const REPORT_TRAILER: &str = "-- ring-lottery --";

/// Errors from one draw attempt, tagged by phase.
#[derive(Debug, Error)]
pub enum DrawError {
    /// Re-authentication during the draw failed.
    #[error("Session refresh failed: {0}")]
    Authentication(#[from] AuthError),

    /// The build-tx request failed.
    #[error("Failed to build lottery transaction: {0}")]
    Build(#[source] ApiError),

    /// Signing or broadcasting failed.
    #[error("Failed to submit lottery transaction: {0}")]
    Submission(#[from] ChainError),

    /// Registering the draw entry failed.
    #[error("Failed to register draw entry: {0}")]
    Participation(#[source] ApiError),

    /// The winner lookup failed.
    #[error("Failed to fetch draw result: {0}")]
    Poll(#[source] ApiError),
}

impl DrawError {
    /// True when the draw never got past a rejected token on its first
    /// authenticated call, so a fresh token deserves a replacement
    /// attempt.
    pub fn is_stale_token(&self) -> bool {
        matches!(self, DrawError::Build(err) if err.is_unauthorized())
    }
}

/// Result record for a single draw attempt.
#[derive(Debug)]
pub struct DrawReport {
    pub index: u32,
    pub result: Result<DrawOutcome, DrawError>,
}

impl DrawReport {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }

    pub fn is_stale_token(&self) -> bool {
        matches!(&self.result, Err(err) if err.is_stale_token())
    }

    /// One-line report. Always ends with [`REPORT_TRAILER`], success or
    /// failure.
    pub fn render(&self) -> String {
        let body = match &self.result {
            Ok(outcome) => match &outcome.winner {
                Some(winner) => format!(
                    "draw {} settled: winner={} result={}",
                    self.index, winner, outcome.raw
                ),
                None => format!("draw {} still pending: result={}", self.index, outcome.raw),
            },
            Err(err) => format!("draw {} failed: {}", self.index, err),
        };
        format!("{} {}", body, REPORT_TRAILER)
    }
}

/// Totals for one complete run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub requested: u32,
    pub batches: u32,
    pub succeeded: u32,
    pub failed: u32,
}
