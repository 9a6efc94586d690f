//! Scheduling side of the timegate trigger system.
//!
//! This crate provides:
//!
//! - **Job Backend Boundary**: The `JobScheduler` trait the host's
//!   queue/worker backend implements
//! - **Mutation Pipeline**: `on_load` / `on_commit` hooks that turn
//!   condition transitions into enqueue/cancel requests
//! - **Fired-Job Executor**: Re-verifies a trigger's condition against
//!   fresh record state before invoking its action

pub mod error;
pub mod executor;
pub mod pipeline;
pub mod scheduler;

pub use error::{ActionError, ExecutorError, PipelineError, SchedulerError, StoreError};
pub use executor::{FireOutcome, RecordStore, TriggerAction, TriggerJobExecutor};
pub use pipeline::{CommitReport, TriggerPipeline};
pub use scheduler::{JobScheduler, ScheduledJob, SchedulingAction};
