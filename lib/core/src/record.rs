//! Record identity as seen by the trigger system.
//!
//! Records themselves live in the host application's storage; the trigger
//! system only ever carries a reference to one (kind + id) through
//! scheduling requests and fired-job callbacks.

use crate::name::{EntityKind, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a record: its entity kind plus its host-assigned ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    /// The entity kind the record belongs to.
    pub kind: EntityKind,
    /// The record's identity within its kind.
    pub id: RecordId,
}

impl RecordKey {
    /// Creates a record key.
    #[must_use]
    pub fn new(kind: impl Into<EntityKind>, id: impl Into<RecordId>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_key_display() {
        let key = RecordKey::new("reservation", "42");
        assert_eq!(key.to_string(), "reservation/42");
    }

    #[test]
    fn record_key_equality_and_hash() {
        use std::collections::HashSet;

        let a = RecordKey::new("reservation", "42");
        let b = RecordKey::new("reservation", "42");
        let c = RecordKey::new("invoice", "42");

        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(b);
        set.insert(c);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }

    #[test]
    fn record_key_serde_roundtrip() {
        let key = RecordKey::new("invoice", "inv-9");
        let json = serde_json::to_string(&key).expect("serialize");
        let parsed: RecordKey = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(key, parsed);
    }
}
