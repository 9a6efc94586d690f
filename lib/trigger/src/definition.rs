//! Trigger definitions.
//!
//! A definition pairs an activation condition (an optional `if` gate and
//! an optional `unless` gate) with the attribute its execution time is
//! anchored on.

use crate::time::TimeOffset;
use timegate_core::{AttributeId, PredicateId, TriggerName};

/// An immutable declarative trigger rule.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerDefinition {
    /// Unique name within the entity kind's registry.
    pub name: TriggerName,
    /// Positive gate; absent means "always open".
    pub if_predicate: Option<PredicateId>,
    /// Negative gate; absent means "never blocks".
    pub unless_predicate: Option<PredicateId>,
    /// The record attribute the execution time is anchored on.
    pub time_source: AttributeId,
    /// Optional shift relative to the anchor; absent means "fire exactly
    /// at the anchor".
    pub offset: Option<TimeOffset>,
}

impl TriggerDefinition {
    /// Creates a definition with no gates and no offset.
    #[must_use]
    pub fn new(name: impl Into<TriggerName>, time_source: impl Into<AttributeId>) -> Self {
        Self {
            name: name.into(),
            if_predicate: None,
            unless_predicate: None,
            time_source: time_source.into(),
            offset: None,
        }
    }

    /// Sets the positive gate.
    #[must_use]
    pub fn when(mut self, predicate: impl Into<PredicateId>) -> Self {
        self.if_predicate = Some(predicate.into());
        self
    }

    /// Sets the negative gate.
    #[must_use]
    pub fn unless(mut self, predicate: impl Into<PredicateId>) -> Self {
        self.unless_predicate = Some(predicate.into());
        self
    }

    /// Sets the offset relative to the anchor.
    #[must_use]
    pub fn with_offset(mut self, offset: TimeOffset) -> Self {
        self.offset = Some(offset);
        self
    }
}
