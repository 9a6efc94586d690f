//! The mutation pipeline: load, commit, emit.
//!
//! The host's record lifecycle calls `on_load` when a record comes out of
//! storage (capturing the on-disk condition results) and `on_commit` after
//! a mutation is durably committed. The pipeline diffs the two result
//! sets, emits the resulting enqueue/cancel requests to the job backend,
//! and carries the committed results forward for the next mutation.
//!
//! The pipeline holds no locks and no per-record state of its own; the
//! `MutationWindow` is owned by the caller alongside its record, and
//! serializing mutations of the same record is the host's responsibility.

use crate::error::{PipelineError, SchedulerError};
use crate::scheduler::{JobScheduler, ScheduledJob, SchedulingAction};
use std::sync::Arc;
use timegate_core::TriggerName;
use timegate_trigger::{
    MutationWindow, TriggerRegistry, TriggerSubject, condition, time, transition::Decision,
};
use tracing::{debug, instrument, warn};

/// What happened at one commit: emitted requests, skipped triggers, and
/// backend failures.
///
/// Backend failures and missing anchors are deliberately non-fatal — the
/// data mutation is already committed and is never rolled back for the
/// sake of job scheduling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitReport {
    /// Requests the backend accepted.
    pub actions: Vec<SchedulingAction>,
    /// Triggers skipped because their anchor attribute was null.
    pub missing_anchor: Vec<TriggerName>,
    /// Requests the backend failed to accept. Not retried.
    pub failures: Vec<(TriggerName, SchedulerError)>,
}

impl CommitReport {
    /// Returns whether every decision was carried out.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing_anchor.is_empty() && self.failures.is_empty()
    }
}

/// Connects the trigger core to a record lifecycle and a job backend.
pub struct TriggerPipeline<S> {
    registry: Arc<TriggerRegistry>,
    scheduler: S,
}

impl<S: JobScheduler> TriggerPipeline<S> {
    /// Creates a pipeline over a registry and a job backend.
    #[must_use]
    pub fn new(registry: Arc<TriggerRegistry>, scheduler: S) -> Self {
        Self {
            registry,
            scheduler,
        }
    }

    /// The registry this pipeline evaluates against.
    #[must_use]
    pub fn registry(&self) -> &TriggerRegistry {
        &self.registry
    }

    /// Captures the condition results of a record just loaded from
    /// storage, as the baseline for the next commit.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Evaluation` if a predicate is unknown or
    /// fails.
    #[instrument(skip(self, record), fields(record = %record.record_key()))]
    pub fn on_load<R>(&self, record: &R) -> Result<MutationWindow, PipelineError>
    where
        R: TriggerSubject,
    {
        let results = condition::evaluate(&self.registry, record)?;
        Ok(MutationWindow::loaded(results))
    }

    /// Starts a window for a newly created record, with no baseline.
    #[must_use]
    pub fn on_create(&self) -> MutationWindow {
        MutationWindow::created()
    }

    /// Processes a durably committed mutation.
    ///
    /// Evaluates the committed state, decides per trigger, emits the
    /// requests, and carries the committed results forward in `window`.
    /// Evaluation failure is fatal and leaves the window untouched;
    /// anything after that point is reported, not raised.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Evaluation` if a predicate is unknown or
    /// fails.
    #[instrument(skip(self, record, window), fields(record = %record.record_key()))]
    pub async fn on_commit<R>(
        &self,
        record: &R,
        window: &mut MutationWindow,
    ) -> Result<CommitReport, PipelineError>
    where
        R: TriggerSubject,
    {
        let after = condition::evaluate(&self.registry, record)?;
        let decisions = window.observe(after);
        debug!(decisions = decisions.len(), "transition decisions computed");

        let key = record.record_key();
        let mut report = CommitReport::default();

        for decision in decisions {
            match decision {
                Decision::Enqueue { trigger } => {
                    let Some(definition) = self.registry.get(&trigger) else {
                        continue;
                    };

                    let anchor = record.anchor(&definition.time_source);
                    let target_time = match time::resolve(anchor, definition.offset) {
                        Ok(target_time) => target_time,
                        Err(_) => {
                            warn!(
                                trigger = %trigger,
                                attribute = %definition.time_source,
                                "time anchor is null; scheduling skipped"
                            );
                            report.missing_anchor.push(trigger);
                            continue;
                        }
                    };

                    let job = ScheduledJob::new(trigger.clone(), key.clone(), target_time);
                    match self.scheduler.enqueue(job).await {
                        Ok(()) => report.actions.push(SchedulingAction::Enqueue {
                            trigger,
                            record: key.clone(),
                            target_time,
                        }),
                        Err(err) => {
                            warn!(trigger = %trigger, error = %err, "enqueue failed");
                            report.failures.push((trigger, err));
                        }
                    }
                }
                Decision::Cancel { trigger } => {
                    match self.scheduler.cancel(&trigger, &key).await {
                        Ok(()) => report.actions.push(SchedulingAction::Cancel {
                            trigger,
                            record: key.clone(),
                        }),
                        Err(err) => {
                            warn!(trigger = %trigger, error = %err, "cancel failed");
                            report.failures.push((trigger, err));
                        }
                    }
                }
            }
        }

        Ok(report)
    }
}
