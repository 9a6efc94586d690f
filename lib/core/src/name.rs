//! Strongly-typed name types for trigger configuration.
//!
//! Trigger names, predicate references, and attribute references all come
//! from host code at registry-build time, so they are string-backed rather
//! than ULID-backed. The newtypes keep the different kinds of reference
//! from being mixed up in signatures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing a name from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNameError {
    /// The type of name that failed to parse.
    pub name_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.name_type, self.reason)
    }
}

impl std::error::Error for ParseNameError {}

/// Macro to generate a strongly-typed name wrapper around a string.
macro_rules! define_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new name from any string-like value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the name as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseNameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() {
                    return Err(ParseNameError {
                        name_type: stringify!($name),
                        reason: "name must not be empty".to_string(),
                    });
                }
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_name!(
    /// Unique name of a trigger within its entity kind's registry.
    TriggerName
);

define_name!(
    /// Reference to a boolean predicate a record can evaluate.
    PredicateId
);

define_name!(
    /// Reference to a date/date-time attribute on a record.
    AttributeId
);

define_name!(
    /// The kind of entity a registry and its records belong to.
    EntityKind
);

define_name!(
    /// Host-assigned identity of a single record, in string form.
    RecordId
);
