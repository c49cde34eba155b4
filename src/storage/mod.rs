//! Storage layer for the persisted collapse preference.
//!
//! This module provides the persistence abstraction the controller writes its
//! one durable value through: a string-keyed, string-valued store holding the
//! literal `"true"`/`"false"` collapse preference.
//!
//! # Modules
//!
//! - `backend`: [`PreferenceStore`] trait abstraction and the well-known key
//! - `json`: JSON file-based implementation with atomic writes
//! - `memory`: in-memory implementation for tests and non-durable hosts

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::{PreferenceStore, COLLAPSED_KEY};
pub use json::JsonPreferences;
pub use memory::MemoryPreferences;
