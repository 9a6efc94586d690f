//! Execution-time resolution from a record's anchor attribute.
//!
//! A trigger fires relative to a single date or date-time attribute of the
//! record (the anchor), optionally shifted by a fixed offset.

use crate::error::TimeError;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// The value of a record's time-source attribute.
///
/// A pure calendar date is interpreted as midnight (00:00:00) UTC at the
/// start of that date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorValue {
    /// A calendar date with no time-of-day component.
    Date(NaiveDate),
    /// A fully-qualified instant.
    DateTime(DateTime<Utc>),
}

impl From<NaiveDate> for AnchorValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime<Utc>> for AnchorValue {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::DateTime(instant)
    }
}

/// A fixed shift applied to the anchor when computing the execution time.
///
/// The enum makes "at most one of before/after" a type-level invariant
/// rather than a per-call check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOffset {
    /// Fire this long before the anchor.
    Before(TimeDelta),
    /// Fire this long after the anchor.
    After(TimeDelta),
}

/// Resolves the absolute execution time for a trigger.
///
/// # Errors
///
/// Returns `TimeError::MissingAnchor` if the anchor attribute is
/// null/absent on the record.
pub fn resolve(
    anchor: Option<AnchorValue>,
    offset: Option<TimeOffset>,
) -> Result<DateTime<Utc>, TimeError> {
    let base = match anchor.ok_or(TimeError::MissingAnchor)? {
        AnchorValue::Date(date) => date.and_time(NaiveTime::MIN).and_utc(),
        AnchorValue::DateTime(instant) => instant,
    };

    Ok(match offset {
        Some(TimeOffset::Before(delta)) => base - delta,
        Some(TimeOffset::After(delta)) => base + delta,
        None => base,
    })
}
