//! Error types for the trigger crate.
//!
//! - `PredicateError`: Errors from evaluating a record predicate
//! - `RegistryError`: Errors from building a trigger registry
//! - `TimeError`: Errors from resolving an execution time

use std::fmt;
use timegate_core::{PredicateId, TriggerName};

/// Errors from evaluating a record predicate.
///
/// There is no safe default for an unevaluable condition, so these abort
/// the whole evaluation pass for the record rather than guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateError {
    /// The record does not know the referenced predicate.
    Unknown { id: PredicateId },
    /// The predicate was invoked but failed.
    Failed { id: PredicateId, reason: String },
}

impl fmt::Display for PredicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { id } => write!(f, "unknown predicate: {id}"),
            Self::Failed { id, reason } => {
                write!(f, "predicate {id} failed: {reason}")
            }
        }
    }
}

impl std::error::Error for PredicateError {}

/// Errors from building a trigger registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two definitions share the same trigger name.
    DuplicateTrigger { name: TriggerName },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTrigger { name } => {
                write!(f, "duplicate trigger definition: {name}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Errors from resolving an execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The time-source attribute resolved to null/absent.
    MissingAnchor,
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAnchor => write!(f, "time anchor attribute is missing"),
        }
    }
}

impl std::error::Error for TimeError {}
