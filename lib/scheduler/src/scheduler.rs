//! The job backend boundary.
//!
//! The trigger system never executes anything itself; it hands enqueue
//! and cancel requests to whatever queue/worker backend the host wires in
//! through the `JobScheduler` trait.

use crate::error::SchedulerError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use timegate_core::{JobId, RecordKey, TriggerName};

/// A deferred trigger run handed to the job backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledJob {
    /// Unique identifier for this enqueue request.
    pub id: JobId,
    /// The trigger whose action should run.
    pub trigger: TriggerName,
    /// The record the action runs against.
    pub record: RecordKey,
    /// The absolute instant the job should fire.
    pub target_time: DateTime<Utc>,
    /// When this request was created.
    pub created_at: DateTime<Utc>,
}

impl ScheduledJob {
    /// Creates a new job request.
    #[must_use]
    pub fn new(trigger: TriggerName, record: RecordKey, target_time: DateTime<Utc>) -> Self {
        Self {
            id: JobId::new(),
            trigger,
            record,
            target_time,
            created_at: Utc::now(),
        }
    }
}

/// An emitted request, as reported back to the commit caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SchedulingAction {
    /// A job was enqueued.
    Enqueue {
        /// The scheduled trigger.
        trigger: TriggerName,
        /// The record it concerns.
        record: RecordKey,
        /// When it will fire.
        target_time: DateTime<Utc>,
    },
    /// A cancellation was issued.
    Cancel {
        /// The cancelled trigger.
        trigger: TriggerName,
        /// The record it concerns.
        record: RecordKey,
    },
}

/// Trait for the queue/worker backend.
///
/// Requests arrive only after the mutation that produced them has been
/// durably committed.
#[async_trait]
pub trait JobScheduler: Send + Sync {
    /// Schedules a job to fire at `job.target_time`.
    ///
    /// The backend must support arbitrary future instants; idempotency is
    /// not required.
    async fn enqueue(&self, job: ScheduledJob) -> Result<(), SchedulerError>;

    /// Cancels any pending job for `(trigger, record)`.
    ///
    /// Cancelling a job that does not exist must be `Ok`, not an error:
    /// the pipeline issues cancels defensively. A backend without
    /// cancellation support accepts the request and does nothing.
    async fn cancel(&self, trigger: &TriggerName, record: &RecordKey)
    -> Result<(), SchedulerError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn scheduled_job_creation() {
        let target = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let job = ScheduledJob::new(
            TriggerName::new("send_reminder"),
            RecordKey::new("reservation", "42"),
            target,
        );

        assert_eq!(job.trigger.as_str(), "send_reminder");
        assert_eq!(job.target_time, target);
        assert!(job.id.to_string().starts_with("job_"));
    }

    #[test]
    fn scheduled_job_serde_roundtrip() {
        let job = ScheduledJob::new(
            TriggerName::new("send_reminder"),
            RecordKey::new("reservation", "42"),
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        );

        let json = serde_json::to_string(&job).expect("serialize");
        let parsed: ScheduledJob = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(job, parsed);
    }

    #[test]
    fn scheduling_action_serde_tagging() {
        let action = SchedulingAction::Cancel {
            trigger: TriggerName::new("send_reminder"),
            record: RecordKey::new("reservation", "42"),
        };

        let json = serde_json::to_string(&action).expect("serialize");
        assert!(json.contains("\"action\":\"cancel\""));
    }
}
