//! The per-entity-kind trigger registry.
//!
//! A registry is built once at startup from the host's declarations and
//! is read-only afterwards, so it can be shared freely (typically behind
//! an `Arc`) across whatever workers run the mutation pipeline.

use crate::definition::TriggerDefinition;
use crate::error::RegistryError;
use std::collections::BTreeMap;
use timegate_core::{EntityKind, TriggerName};

/// Read-only mapping from trigger name to definition for one entity kind.
#[derive(Debug, Clone)]
pub struct TriggerRegistry {
    kind: EntityKind,
    triggers: BTreeMap<TriggerName, TriggerDefinition>,
}

impl TriggerRegistry {
    /// Starts building a registry for an entity kind.
    #[must_use]
    pub fn builder(kind: impl Into<EntityKind>) -> TriggerRegistryBuilder {
        TriggerRegistryBuilder {
            kind: kind.into(),
            definitions: Vec::new(),
        }
    }

    /// The entity kind this registry covers.
    #[must_use]
    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Looks up a definition by trigger name.
    #[must_use]
    pub fn get(&self, name: &TriggerName) -> Option<&TriggerDefinition> {
        self.triggers.get(name)
    }

    /// Iterates over all definitions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &TriggerDefinition> {
        self.triggers.values()
    }

    /// Number of registered triggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    /// Returns whether the registry has no triggers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

/// Builder for a `TriggerRegistry`.
#[derive(Debug)]
pub struct TriggerRegistryBuilder {
    kind: EntityKind,
    definitions: Vec<TriggerDefinition>,
}

impl TriggerRegistryBuilder {
    /// Adds a trigger definition.
    #[must_use]
    pub fn trigger(mut self, definition: TriggerDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Builds the registry.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateTrigger` if two definitions share
    /// a name.
    pub fn build(self) -> Result<TriggerRegistry, RegistryError> {
        let mut triggers = BTreeMap::new();

        for definition in self.definitions {
            let name = definition.name.clone();
            if triggers.insert(name.clone(), definition).is_some() {
                return Err(RegistryError::DuplicateTrigger { name });
            }
        }

        Ok(TriggerRegistry {
            kind: self.kind,
            triggers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_registry_with_lookup() {
        let registry = TriggerRegistry::builder("reservation")
            .trigger(TriggerDefinition::new("send_reminder", "starts_at"))
            .trigger(TriggerDefinition::new("release_hold", "expires_at"))
            .build()
            .expect("no duplicates");

        assert_eq!(registry.kind().as_str(), "reservation");
        assert_eq!(registry.len(), 2);
        assert!(registry.get(&TriggerName::new("send_reminder")).is_some());
        assert!(registry.get(&TriggerName::new("unknown")).is_none());
    }

    #[test]
    fn iterates_in_name_order() {
        let registry = TriggerRegistry::builder("reservation")
            .trigger(TriggerDefinition::new("release_hold", "expires_at"))
            .trigger(TriggerDefinition::new("send_reminder", "starts_at"))
            .build()
            .expect("no duplicates");

        let names: Vec<&str> = registry.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["release_hold", "send_reminder"]);
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = TriggerRegistry::builder("reservation")
            .trigger(TriggerDefinition::new("send_reminder", "starts_at"))
            .trigger(TriggerDefinition::new("send_reminder", "expires_at"))
            .build();

        assert_eq!(
            result.err(),
            Some(RegistryError::DuplicateTrigger {
                name: TriggerName::new("send_reminder"),
            })
        );
    }

    #[test]
    fn empty_registry() {
        let registry = TriggerRegistry::builder("reservation")
            .build()
            .expect("empty is valid");

        assert!(registry.is_empty());
    }
}
