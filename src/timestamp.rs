//! Canonical wire timestamps.
//!
//! The error-tracking service expects occurrence times as
//! `YYYY-MM-DDTHH:MM:SSZ` — UTC, second resolution, no offset, no
//! fractional seconds. [`Timestamp`] captures an instant once and renders
//! that exact form.

use chrono::{DateTime, Datelike, Utc};

use crate::error::ReportError;

/// strftime pattern for the service's timestamp field.
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A UTC instant at second resolution.
///
/// Immutable once captured: repeated [`to_wire`](Timestamp::to_wire) calls
/// on the same value return the same string, and the clock is never
/// re-sampled.
///
/// # Examples
///
/// ```
/// use error_beacon::Timestamp;
///
/// let ts = Timestamp::from_epoch(0)?;
/// assert_eq!(ts.to_wire(), "1970-01-01T00:00:00Z");
/// # Ok::<(), error_beacon::ReportError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Captures the current wall-clock time (UTC).
    #[inline]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Builds a timestamp from explicit epoch seconds.
    ///
    /// Fails with [`ReportError::Formatting`] when the instant is outside
    /// the representable range of the underlying datetime type, or when its
    /// year would not fit the four-digit wire pattern.
    pub fn from_epoch(secs: i64) -> Result<Self, ReportError> {
        let instant =
            DateTime::from_timestamp(secs, 0).ok_or(ReportError::Formatting { epoch: secs })?;
        if !(0..=9999).contains(&instant.year()) {
            return Err(ReportError::Formatting { epoch: secs });
        }
        Ok(Self(instant))
    }

    /// Renders the canonical `YYYY-MM-DDTHH:MM:SSZ` form.
    ///
    /// Sub-second precision, if the instant carries any, is truncated
    /// rather than rounded.
    #[inline]
    pub fn to_wire(&self) -> String {
        self.0.format(WIRE_FORMAT).to_string()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    #[inline]
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}
