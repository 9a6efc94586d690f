//! The fired-job entry point.
//!
//! The window between enqueue and fire can be arbitrarily long, so a
//! fired job never trusts the state it was scheduled from: it re-fetches
//! the record, re-evaluates the one trigger that fired, and only then
//! invokes the action. A condition that reverted in the meantime is a
//! silent skip, not an error.

use crate::error::{ActionError, ExecutorError, StoreError};
use async_trait::async_trait;
use std::sync::Arc;
use timegate_core::{RecordKey, TriggerName};
use timegate_trigger::{TriggerRegistry, TriggerSubject, condition};
use tracing::{debug, instrument};

/// Trait for re-fetching a record's current persisted state.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// The record type this store produces.
    type Record: TriggerSubject + Send + Sync;

    /// Fetches a record by key; `None` means it no longer exists.
    async fn fetch(&self, key: &RecordKey) -> Result<Option<Self::Record>, StoreError>;
}

/// Trait for the action a trigger runs when it fires.
#[async_trait]
pub trait TriggerAction: Send + Sync {
    /// The record type the action runs against.
    type Record;

    /// Invokes the named trigger's action on the record.
    async fn invoke(&self, record: &Self::Record, trigger: &TriggerName)
    -> Result<(), ActionError>;
}

/// What happened when a scheduled job fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// The condition still held and the action ran.
    Invoked,
    /// The condition no longer held; the action was skipped.
    ConditionNotMet,
}

/// Executes fired jobs after re-verifying their trigger condition.
pub struct TriggerJobExecutor<R, A> {
    registry: Arc<TriggerRegistry>,
    store: R,
    action: A,
}

impl<R, A> TriggerJobExecutor<R, A>
where
    R: RecordStore,
    A: TriggerAction<Record = R::Record>,
{
    /// Creates an executor over a registry, record store, and action.
    #[must_use]
    pub fn new(registry: Arc<TriggerRegistry>, store: R, action: A) -> Self {
        Self {
            registry,
            store,
            action,
        }
    }

    /// Entry point for the job backend when a scheduled job fires.
    ///
    /// # Errors
    ///
    /// Returns `ExecutorError` if the trigger is unknown, the record is
    /// gone, re-verification cannot evaluate the condition, or the action
    /// itself fails.
    #[instrument(skip(self), fields(record = %key, trigger = %trigger))]
    pub async fn on_fire(
        &self,
        key: &RecordKey,
        trigger: &TriggerName,
    ) -> Result<FireOutcome, ExecutorError> {
        let definition =
            self.registry
                .get(trigger)
                .ok_or_else(|| ExecutorError::UnknownTrigger {
                    trigger: trigger.clone(),
                })?;

        let record = self
            .store
            .fetch(key)
            .await?
            .ok_or_else(|| ExecutorError::RecordNotFound { key: key.clone() })?;

        if !condition::evaluate_trigger(definition, &record)? {
            debug!("condition no longer satisfied; action skipped");
            return Ok(FireOutcome::ConditionNotMet);
        }

        self.action.invoke(&record, trigger).await?;
        Ok(FireOutcome::Invoked)
    }
}
