//! Condition evaluation: which triggers does a record currently satisfy?
//!
//! Evaluation is pure observation. It is run twice around every mutation
//! (once against the loaded state, once against the committed state) and
//! once more, for a single trigger, when a scheduled job fires.

use crate::definition::TriggerDefinition;
use crate::error::PredicateError;
use crate::registry::TriggerRegistry;
use crate::subject::TriggerSubject;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use timegate_core::TriggerName;

/// Per-trigger activation results for one record at one point in time.
///
/// Ephemeral; held only inside a mutation window, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionResultSet(BTreeMap<TriggerName, bool>);

impl ConditionResultSet {
    /// Looks up the result for a trigger, if it was evaluated.
    #[must_use]
    pub fn get(&self, name: &TriggerName) -> Option<bool> {
        self.0.get(name).copied()
    }

    /// Returns whether the trigger's activation condition held.
    ///
    /// A trigger absent from the set counts as not satisfied.
    #[must_use]
    pub fn is_satisfied(&self, name: &TriggerName) -> bool {
        self.get(name).unwrap_or(false)
    }

    /// Iterates over `(trigger name, result)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&TriggerName, bool)> {
        self.0.iter().map(|(name, result)| (name, *result))
    }

    /// Number of evaluated triggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no triggers were evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(TriggerName, bool)> for ConditionResultSet {
    fn from_iter<I: IntoIterator<Item = (TriggerName, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Evaluates every trigger in the registry against the record.
///
/// # Errors
///
/// Returns the first `PredicateError` encountered; a record whose
/// condition cannot be evaluated has no usable result set.
pub fn evaluate<S>(
    registry: &TriggerRegistry,
    subject: &S,
) -> Result<ConditionResultSet, PredicateError>
where
    S: TriggerSubject + ?Sized,
{
    registry
        .iter()
        .map(|definition| {
            evaluate_trigger(definition, subject).map(|result| (definition.name.clone(), result))
        })
        .collect()
}

/// Evaluates a single trigger's activation condition.
///
/// The `unless` gate is only consulted when the `if` gate is open, so an
/// expensive negative predicate is never run for a record the trigger
/// does not apply to anyway.
///
/// # Errors
///
/// Returns `PredicateError` if a consulted predicate is unknown or fails.
pub fn evaluate_trigger<S>(
    definition: &TriggerDefinition,
    subject: &S,
) -> Result<bool, PredicateError>
where
    S: TriggerSubject + ?Sized,
{
    let if_result = match &definition.if_predicate {
        Some(id) => subject.predicate(id)?,
        None => true,
    };

    if !if_result {
        return Ok(false);
    }

    match &definition.unless_predicate {
        Some(id) => Ok(!subject.predicate(id)?),
        None => Ok(true),
    }
}
