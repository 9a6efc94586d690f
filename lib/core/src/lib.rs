//! Core domain types and utilities for the timegate trigger system.
//!
//! This crate provides the foundational types, error handling, and shared
//! utilities used throughout timegate's condition-transition scheduling.

pub mod error;
pub mod id;
pub mod name;
pub mod record;

pub use error::Result;
pub use id::JobId;
pub use name::{AttributeId, EntityKind, PredicateId, RecordId, TriggerName};
pub use record::RecordKey;
