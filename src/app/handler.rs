//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! viewport changes, translating them into state changes and action sequences.
//! It is the only place sidebar state transitions happen.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the hosting page's event dispatch
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`SidebarState`] methods
//! 4. A render flag and side-effect actions are returned for execution
//!
//! The handler is pure with respect to the outside world: it touches no render
//! target and no store. That keeps every transition in this module testable
//! without any rendering or persistence fakes.
//!
//! # Totality
//!
//! Every event is defined for every reachable state. Events that do not apply
//! in the current mode (for example [`Event::Collapse`] while in `Mobile`)
//! produce no state change and no actions.

use super::actions::Action;
use super::modes::DisplayMode;
use super::state::SidebarState;

/// Events triggered by user input or viewport changes.
///
/// Each event represents a discrete occurrence that may cause a state change,
/// a re-render, and side-effect actions. The hosting page translates its own
/// dispatch mechanism (DOM listeners, test drivers) into these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Mode-dependent toggle: flips the overlay in `Mobile`, the collapse
    /// preference in `Desktop`. Fired by either toggle control.
    ToggleSidebar,
    /// Opens the mobile overlay. No-op outside `Mobile` mode; idempotent.
    OpenMobile,
    /// Closes the mobile overlay. No-op outside `Mobile` mode; idempotent.
    CloseMobile,
    /// Sets the collapse preference. No-op in `Mobile` mode.
    Collapse,
    /// Clears the collapse preference. No-op in `Mobile` mode.
    Expand,
    /// The dimming backdrop behind the mobile overlay was clicked.
    OverlayClicked,
    /// The escape key was pressed anywhere on the page.
    ///
    /// Closes the overlay only when in `Mobile` mode with the overlay open;
    /// otherwise ignored.
    EscapePressed,
    /// The viewport was resized to the given width in CSS pixels.
    Resized {
        /// New viewport width.
        width: u32,
    },
}

/// Processes an event, mutates sidebar state, and returns what to execute.
///
/// Returns a tuple of:
/// - `bool` - whether the renderer should re-apply the full state
/// - `Vec<Action>` - side effects to execute after rendering
///
/// The vector is empty for events that only change visual state; persistence
/// and icon actions are emitted only when the collapse preference is involved.
///
/// # Tracing
///
/// Each call creates a debug-level span carrying the event type.
pub fn handle_event(state: &mut SidebarState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::ToggleSidebar => match state.mode {
            DisplayMode::Mobile => {
                state.mobile_open = !state.mobile_open;
                tracing::debug!(open = state.mobile_open, "mobile overlay toggled");
                (true, vec![])
            }
            DisplayMode::Desktop => {
                state.collapsed = !state.collapsed;
                tracing::debug!(collapsed = state.collapsed, "desktop sidebar toggled");
                (
                    true,
                    vec![
                        Action::PersistPreference(state.collapsed),
                        Action::RefreshToggleIcon,
                    ],
                )
            }
        },
        Event::OpenMobile => {
            if !state.mode.is_mobile() || state.mobile_open {
                return (false, vec![]);
            }
            state.mobile_open = true;
            (true, vec![])
        }
        Event::CloseMobile | Event::OverlayClicked => {
            if !state.mode.is_mobile() || !state.mobile_open {
                return (false, vec![]);
            }
            state.mobile_open = false;
            (true, vec![])
        }
        Event::Collapse => set_collapsed(state, true),
        Event::Expand => set_collapsed(state, false),
        Event::EscapePressed => {
            if state.mode.is_mobile() && state.mobile_open {
                tracing::debug!("closing mobile overlay on escape");
                state.mobile_open = false;
                (true, vec![])
            } else {
                (false, vec![])
            }
        }
        Event::Resized { width } => {
            if !state.update_mode(*width) {
                return (false, vec![]);
            }

            tracing::debug!(width, mode = ?state.mode, "display mode changed");

            // Entering desktop restores the persisted preference rendering,
            // so the chevron must match it again.
            let actions = match state.mode {
                DisplayMode::Desktop => vec![Action::RefreshToggleIcon],
                DisplayMode::Mobile => vec![],
            };
            (true, actions)
        }
    }
}

/// Shared implementation of the explicit desktop-only setters.
///
/// Persists and refreshes the icon even when the preference already holds the
/// requested value, matching the toggle contract: each call writes the
/// resulting preference.
fn set_collapsed(state: &mut SidebarState, collapsed: bool) -> (bool, Vec<Action>) {
    if state.mode.is_mobile() {
        return (false, vec![]);
    }
    state.collapsed = collapsed;
    (
        true,
        vec![
            Action::PersistPreference(collapsed),
            Action::RefreshToggleIcon,
        ],
    )
}
