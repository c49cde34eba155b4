//! Application layer coordinating state, events, and actions.
//!
//! This module defines the sidebar's core logic layer, sitting between the
//! hosting page (which owns event dispatch) and the storage/UI layers.
//!
//! # Architecture
//!
//! The layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Input → Events → Event Handler → State Mutations → Render + Actions
//! ```
//!
//! The handler in [`handler`] is pure; the controller in [`controller`]
//! executes its output against the injected preference store and render
//! targets.
//!
//! # Modules
//!
//! - [`actions`]: side-effect commands emitted by the event handler
//! - [`controller`]: the owning component wiring handler, store, and targets
//! - [`handler`]: event processing logic and state transitions
//! - [`modes`]: display-mode classification and breakpoint
//! - [`state`]: the sidebar state container

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use controller::SidebarController;
pub use handler::{handle_event, Event};
pub use modes::{DisplayMode, MOBILE_BREAKPOINT};
pub use state::SidebarState;
