//! Preference store abstraction.
//!
//! This module defines the [`PreferenceStore`] trait that abstracts over the
//! durable key-value surface the sidebar persists its collapse preference to.
//! The hosting environment injects an implementation at construction, which
//! keeps the controller testable against an in-memory store.
//!
//! # Design Philosophy
//!
//! The trait is deliberately minimal: two string-keyed operations, exactly the
//! surface the original dashboard used. It is not a generic settings API.

use crate::domain::error::Result;

/// The key under which the collapse preference is stored.
///
/// The value is the literal string `"true"` or `"false"`. Absence of the key
/// reads as `false`.
pub const COLLAPSED_KEY: &str = "sidebarCollapsed";

/// Abstraction over durable string-keyed preference storage.
///
/// # Implementations
///
/// - [`JsonPreferences`](crate::storage::JsonPreferences): JSON file with
///   atomic writes (default for native hosts)
/// - [`MemoryPreferences`](crate::storage::MemoryPreferences): in-memory map
///   for tests and hosts without durable storage
pub trait PreferenceStore: Send {
    /// Reads the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails. The controller treats a
    /// failed read the same as an absent key.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails. The controller logs and
    /// absorbs write failures; the in-memory state stays authoritative.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
