//! Transition decisions across a record mutation.
//!
//! Compares the condition results captured before and after a committed
//! mutation and decides, per trigger, whether a job should be enqueued or
//! cancelled. The `MutationWindow` carries the most recent results forward
//! so consecutive mutations in the same in-memory lifetime diff against
//! the latest committed state, not the originally-loaded one.

use crate::condition::ConditionResultSet;
use serde::{Deserialize, Serialize};
use timegate_core::TriggerName;

/// A per-trigger scheduling decision for one committed mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// Request a deferred run of the trigger's action.
    Enqueue {
        /// The trigger to schedule.
        trigger: TriggerName,
    },
    /// Request cancellation of any pending run.
    Cancel {
        /// The trigger to cancel.
        trigger: TriggerName,
    },
}

impl Decision {
    /// The trigger this decision concerns.
    #[must_use]
    pub fn trigger(&self) -> &TriggerName {
        match self {
            Self::Enqueue { trigger } | Self::Cancel { trigger } => trigger,
        }
    }
}

/// Decides what to do for every trigger present in `after`.
///
/// `before` of `None` means this is the record's first observation (a
/// newly created record): nothing can be pending, so only enqueues are
/// ever emitted. With a baseline present, an enqueue requires a strict
/// false-to-true transition (true-to-true must not double-schedule), and
/// any false after-state issues a cancel regardless of the before-state —
/// an enqueue missed by an earlier race or bug still gets cleaned up, and
/// the backend treats cancelling nothing as a no-op.
#[must_use]
pub fn decide(before: Option<&ConditionResultSet>, after: &ConditionResultSet) -> Vec<Decision> {
    let mut decisions = Vec::new();

    for (name, after_result) in after.iter() {
        match before {
            None => {
                if after_result {
                    decisions.push(Decision::Enqueue {
                        trigger: name.clone(),
                    });
                }
            }
            Some(before) => {
                if !before.is_satisfied(name) && after_result {
                    decisions.push(Decision::Enqueue {
                        trigger: name.clone(),
                    });
                }
                if !after_result {
                    decisions.push(Decision::Cancel {
                        trigger: name.clone(),
                    });
                }
            }
        }
    }

    decisions
}

/// Transient before/after state for one record's mutation lifetime.
///
/// One window per in-memory record; created at load (or at creation, with
/// no baseline) and consulted at every commit. The host must serialize
/// mutations of the same record so observations are never interleaved.
#[derive(Debug, Clone, Default)]
pub struct MutationWindow {
    baseline: Option<ConditionResultSet>,
}

impl MutationWindow {
    /// Window for a newly created record: no prior observation exists.
    #[must_use]
    pub fn created() -> Self {
        Self { baseline: None }
    }

    /// Window for a record loaded from storage, with its on-disk results.
    #[must_use]
    pub fn loaded(results: ConditionResultSet) -> Self {
        Self {
            baseline: Some(results),
        }
    }

    /// The current baseline, if any observation has been captured.
    #[must_use]
    pub fn baseline(&self) -> Option<&ConditionResultSet> {
        self.baseline.as_ref()
    }

    /// Processes a post-commit observation.
    ///
    /// Decides against the current baseline, then carries `after` forward
    /// as the new baseline for the next mutation.
    pub fn observe(&mut self, after: ConditionResultSet) -> Vec<Decision> {
        let decisions = decide(self.baseline.as_ref(), &after);
        self.baseline = Some(after);
        decisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(pairs: &[(&str, bool)]) -> ConditionResultSet {
        pairs
            .iter()
            .map(|(name, result)| (TriggerName::new(*name), *result))
            .collect()
    }

    fn enqueues(decisions: &[Decision]) -> usize {
        decisions
            .iter()
            .filter(|d| matches!(d, Decision::Enqueue { .. }))
            .count()
    }

    fn cancels(decisions: &[Decision]) -> usize {
        decisions
            .iter()
            .filter(|d| matches!(d, Decision::Cancel { .. }))
            .count()
    }

    #[test]
    fn new_record_true_enqueues_once() {
        let decisions = decide(None, &results(&[("t", true)]));

        assert_eq!(enqueues(&decisions), 1);
        assert_eq!(cancels(&decisions), 0);
    }

    #[test]
    fn new_record_false_does_nothing() {
        let decisions = decide(None, &results(&[("t", false)]));
        assert!(decisions.is_empty());
    }

    #[test]
    fn false_to_true_enqueues_once() {
        let decisions = decide(
            Some(&results(&[("t", false)])),
            &results(&[("t", true)]),
        );

        assert_eq!(decisions, vec![Decision::Enqueue {
            trigger: TriggerName::new("t"),
        }]);
    }

    #[test]
    fn true_to_false_cancels_once() {
        let decisions = decide(
            Some(&results(&[("t", true)])),
            &results(&[("t", false)]),
        );

        assert_eq!(decisions, vec![Decision::Cancel {
            trigger: TriggerName::new("t"),
        }]);
    }

    #[test]
    fn true_to_true_does_not_double_schedule() {
        let decisions = decide(
            Some(&results(&[("t", true)])),
            &results(&[("t", true)]),
        );

        assert!(decisions.is_empty());
    }

    #[test]
    fn false_to_false_still_cancels() {
        let decisions = decide(
            Some(&results(&[("t", false)])),
            &results(&[("t", false)]),
        );

        assert_eq!(enqueues(&decisions), 0);
        assert_eq!(cancels(&decisions), 1);
    }

    #[test]
    fn triggers_decided_independently() {
        let decisions = decide(
            Some(&results(&[("a", false), ("b", true)])),
            &results(&[("a", true), ("b", false)]),
        );

        assert_eq!(decisions, vec![
            Decision::Enqueue {
                trigger: TriggerName::new("a"),
            },
            Decision::Cancel {
                trigger: TriggerName::new("b"),
            },
        ]);
    }

    #[test]
    fn window_carries_state_forward() {
        let mut window = MutationWindow::loaded(results(&[("t", false)]));

        let first = window.observe(results(&[("t", true)]));
        assert_eq!(enqueues(&first), 1);

        // Second mutation diffs against the carried-forward true, not the
        // originally loaded false.
        let second = window.observe(results(&[("t", true)]));
        assert!(second.is_empty());
    }

    #[test]
    fn created_window_has_no_baseline() {
        let mut window = MutationWindow::created();
        assert!(window.baseline().is_none());

        let decisions = window.observe(results(&[("t", true)]));
        assert_eq!(enqueues(&decisions), 1);
        assert_eq!(cancels(&decisions), 0);
        assert!(window.baseline().is_some());
    }

    #[test]
    fn decision_trigger_accessor() {
        let decision = Decision::Cancel {
            trigger: TriggerName::new("t"),
        };
        assert_eq!(decision.trigger().as_str(), "t");
    }

    #[test]
    fn decision_serde_tagging() {
        let decision = Decision::Enqueue {
            trigger: TriggerName::new("t"),
        };

        let json = serde_json::to_string(&decision).expect("serialize");
        assert!(json.contains("\"decision\":\"enqueue\""));
        let parsed: Decision = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decision, parsed);
    }
}
