//! Error types for the scheduler crate.
//!
//! - `SchedulerError`: Errors from the job backend
//! - `StoreError`: Errors from re-fetching records
//! - `ActionError`: Errors from invoking a trigger's action
//! - `PipelineError`: Errors from the commit pipeline
//! - `ExecutorError`: Errors from the fired-job executor

use std::fmt;
use timegate_core::{RecordKey, TriggerName};
use timegate_trigger::PredicateError;

/// Errors from the job backend.
///
/// These are non-fatal relative to the data mutation that produced the
/// request: the commit stands, the failure is reported, nothing retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// The backend could not be reached.
    Unreachable { reason: String },
    /// The backend rejected the request.
    Rejected { reason: String },
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { reason } => {
                write!(f, "job backend unreachable: {reason}")
            }
            Self::Rejected { reason } => {
                write!(f, "job backend rejected request: {reason}")
            }
        }
    }
}

impl std::error::Error for SchedulerError {}

/// Errors from re-fetching a record's persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The storage layer failed.
    FetchFailed { reason: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchFailed { reason } => write!(f, "record fetch failed: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Errors from invoking a trigger's deferred action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The action ran but failed.
    Failed { reason: String },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed { reason } => write!(f, "trigger action failed: {reason}"),
        }
    }
}

impl std::error::Error for ActionError {}

/// Errors from the commit pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A predicate could not be evaluated; the pass has no usable result.
    Evaluation(PredicateError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evaluation(e) => write!(f, "condition evaluation failed: {e}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<PredicateError> for PipelineError {
    fn from(e: PredicateError) -> Self {
        Self::Evaluation(e)
    }
}

/// Errors from the fired-job executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutorError {
    /// Record lookup failed.
    Store(StoreError),
    /// The record no longer exists.
    RecordNotFound { key: RecordKey },
    /// The fired trigger is not in the registry.
    UnknownTrigger { trigger: TriggerName },
    /// Re-verification could not evaluate the condition.
    Evaluation(PredicateError),
    /// The action was invoked and failed.
    Action(ActionError),
}

impl fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "record store error: {e}"),
            Self::RecordNotFound { key } => write!(f, "record not found: {key}"),
            Self::UnknownTrigger { trigger } => write!(f, "unknown trigger: {trigger}"),
            Self::Evaluation(e) => write!(f, "condition evaluation failed: {e}"),
            Self::Action(e) => write!(f, "action invocation failed: {e}"),
        }
    }
}

impl std::error::Error for ExecutorError {}

impl From<StoreError> for ExecutorError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<PredicateError> for ExecutorError {
    fn from(e: PredicateError) -> Self {
        Self::Evaluation(e)
    }
}

impl From<ActionError> for ExecutorError {
    fn from(e: ActionError) -> Self {
        Self::Action(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timegate_core::PredicateId;

    #[test]
    fn scheduler_error_display() {
        let err = SchedulerError::Unreachable {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("unreachable"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn pipeline_error_wraps_predicate_error() {
        let err = PipelineError::from(PredicateError::Unknown {
            id: PredicateId::new("confirmed"),
        });
        assert!(err.to_string().contains("evaluation failed"));
        assert!(err.to_string().contains("confirmed"));
    }

    #[test]
    fn executor_error_display() {
        let err = ExecutorError::RecordNotFound {
            key: RecordKey::new("reservation", "42"),
        };
        assert!(err.to_string().contains("reservation/42"));
    }
}
