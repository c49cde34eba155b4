//! In-memory preference store.
//!
//! A [`PreferenceStore`] backed by a plain map, with no durability. Used by the
//! test suite and by embedding hosts that have no persistence surface, where
//! the preference simply resets on every load.

use crate::domain::error::Result;
use crate::storage::backend::PreferenceStore;
use std::collections::HashMap;

/// Non-durable preference store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a single key, for test setups.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_none() {
        let store = MemoryPreferences::new();
        assert_eq!(store.get("sidebarCollapsed").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut store = MemoryPreferences::new();
        store.set("sidebarCollapsed", "true").unwrap();
        assert_eq!(
            store.get("sidebarCollapsed").unwrap().as_deref(),
            Some("true")
        );

        store.set("sidebarCollapsed", "false").unwrap();
        assert_eq!(
            store.get("sidebarCollapsed").unwrap().as_deref(),
            Some("false")
        );
    }
}
