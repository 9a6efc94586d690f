//! The capability interface records expose to the trigger system.

use crate::error::PredicateError;
use crate::time::AnchorValue;
use timegate_core::{AttributeId, PredicateId, RecordKey};

/// A record that triggers can be evaluated against.
///
/// Predicate and attribute references are resolved through this trait
/// rather than by late name-based dispatch on the record object, so a
/// registry mentioning a predicate the record does not implement surfaces
/// as an explicit `PredicateError::Unknown`.
pub trait TriggerSubject {
    /// Returns the record's identity for scheduling requests.
    fn record_key(&self) -> RecordKey;

    /// Evaluates the referenced predicate against the record's current
    /// in-memory state.
    ///
    /// Implementations must be read-only observers: evaluating the same
    /// predicate twice on an unchanged record yields the same result and
    /// mutates nothing.
    ///
    /// # Errors
    ///
    /// Returns `PredicateError` if the predicate is unknown or its
    /// evaluation fails.
    fn predicate(&self, id: &PredicateId) -> Result<bool, PredicateError>;

    /// Reads the referenced date/date-time attribute.
    ///
    /// `None` means the attribute is null/absent on this record, which
    /// skips scheduling for the trigger that anchors on it.
    fn anchor(&self, attribute: &AttributeId) -> Option<AnchorValue>;
}
