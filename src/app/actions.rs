//! Actions representing side effects to be executed by the controller.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing an input event. Actions bridge
//! the pure state transition in [`handle_event`](super::handle_event) and the
//! effectful operations the controller performs against the preference store and
//! render targets.
//!
//! Re-rendering is not an action: the handler signals it through the boolean in
//! its return tuple, and the renderer re-applies the full state in one pass.

/// Commands representing side effects to be executed by the controller.
///
/// Produced by the event handler and executed in order by
/// [`SidebarController`](super::SidebarController) after any re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Writes the collapse preference to the preference store.
    ///
    /// Emitted whenever a desktop toggle, collapse, or expand changes the
    /// preference. Store failures are logged and absorbed; the in-memory state
    /// remains authoritative for the rest of the page's lifetime.
    PersistPreference(bool),

    /// Updates the desktop toggle control's chevron icon.
    ///
    /// Emitted alongside preference changes and on transitions into `Desktop`
    /// mode. No-op when the toggle target is absent.
    RefreshToggleIcon,
}
