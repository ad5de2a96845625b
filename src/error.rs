//! Error taxonomy for report generation.

use thiserror::Error;

/// Failures surfaced by the report core.
///
/// All failures are synchronous and local; none are retried here. A builder
/// that returns an error is left in its prior state, so callers never
/// observe a partially mutated report.
///
/// Cause-chain depth truncation is deliberately *not* a variant: it is a
/// soft condition that [`build`](crate::MessageBuilder::build) records and
/// recovers from (see [`MessageBuilder::truncated`](crate::MessageBuilder::truncated)).
#[derive(Debug, Error)]
pub enum ReportError {
    /// The instant cannot be rendered in the canonical wire timestamp
    /// format (outside the representable datetime range, or outside the
    /// four-digit-year window the wire pattern requires).
    #[error("epoch {epoch} is outside the representable timestamp range")]
    Formatting { epoch: i64 },

    /// A builder operation was invoked out of sequence, e.g. `build` run
    /// twice or `serialize` before `build`. A programming-contract
    /// violation, never silently recovered.
    #[error("invalid builder state: {reason}")]
    InvalidState { reason: &'static str },

    /// The assembled document failed to encode as JSON.
    #[error("report encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
