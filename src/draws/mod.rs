//! Draw execution subsystem.
//!
//! # Data Flow
//! ```text
//! requested draw count
//!     → orchestrator.rs (fixed-size batches, token snapshots, waits)
//!         → sequence.rs (build-tx → sign + broadcast → register → poll)
//!             → types.rs (per-draw reports, run summary)
//! ```
//!
//! # Design Decisions
//! - Draws inside a batch run concurrently; the batch join is the only
//!   synchronization point
//! - Each draw keeps the token snapshot it captured at dispatch; a
//!   refresh only affects draws dispatched afterwards
//! - Per-draw failures become reports, never run aborts

pub mod orchestrator;
pub mod sequence;
pub mod types;

pub use orchestrator::{parse_draw_count, Orchestrator};
pub use sequence::DrawSequence;
pub use types::{DrawError, DrawReport, RunSummary, REPORT_TRAILER};
