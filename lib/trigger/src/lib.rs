//! Condition-transition triggers for the timegate scheduling system.
//!
//! This crate provides the decision core:
//!
//! - **Definitions & Registry**: Declarative per-entity-kind trigger rules
//! - **Condition Evaluation**: if/unless gates evaluated against a record
//! - **Transition Decisions**: Enqueue/cancel decisions from before/after
//!   condition diffs, with carry-forward across consecutive mutations
//! - **Time Resolution**: Absolute execution times from anchor attributes
//!
//! Everything here is synchronous and side-effect free; emitting the
//! resulting scheduling requests is the scheduler crate's job.

pub mod condition;
pub mod definition;
pub mod error;
pub mod registry;
pub mod subject;
pub mod time;
pub mod transition;

pub use condition::{ConditionResultSet, evaluate, evaluate_trigger};
pub use definition::TriggerDefinition;
pub use error::{PredicateError, RegistryError, TimeError};
pub use registry::{TriggerRegistry, TriggerRegistryBuilder};
pub use subject::TriggerSubject;
pub use time::{AnchorValue, TimeOffset, resolve};
pub use transition::{Decision, MutationWindow, decide};
