//! Domain layer for the sidebar controller.
//!
//! This module contains the types shared across the crate's layers, independent
//! of any rendering or persistence concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases

pub mod error;

pub use error::{Result, SidebarError};
