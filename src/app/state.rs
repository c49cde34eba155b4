//! Sidebar state container.
//!
//! This module defines [`SidebarState`], the single source of truth for the
//! sidebar's visual state. The state is deliberately tiny: a derived display
//! mode, a persisted collapse preference, and a transient mobile-overlay flag.
//!
//! # Invariant
//!
//! The overlay flag and the collapse preference never contradict the display
//! mode: the mutation helpers keep `mobile_open` `false` outside `Mobile`
//! mode, and the renderer consults the mode before applying either field.

use super::modes::DisplayMode;

/// Central sidebar state container.
///
/// Mutated by the event handler in response to clicks, key presses, and resize
/// events. The renderer reads a snapshot of this state and translates it into
/// visual classes on the render targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    /// Current display mode, derived from the viewport width.
    ///
    /// Recomputed by the resize handler. Never persisted.
    pub mode: DisplayMode,

    /// Persisted collapse preference, meaningful in `Desktop` mode only.
    ///
    /// Loaded from the preference store at construction and written back on
    /// every desktop toggle, collapse, or expand.
    pub collapsed: bool,

    /// Transient mobile-overlay flag, meaningful in `Mobile` mode only.
    ///
    /// Never persisted. Always `false` on construction and forced back to
    /// `false` whenever the display mode changes.
    pub mobile_open: bool,
}

impl SidebarState {
    /// Creates the initial state for a page load.
    ///
    /// The overlay always starts closed, regardless of the stored collapse
    /// preference and regardless of mode.
    #[must_use]
    pub const fn new(mode: DisplayMode, collapsed: bool) -> Self {
        Self {
            mode,
            collapsed,
            mobile_open: false,
        }
    }

    /// Re-derives the display mode from a viewport width.
    ///
    /// Returns `true` if the mode changed. On any change the mobile overlay is
    /// forced closed, in both transition directions, so the next `Mobile`
    /// entry always starts from a clean state.
    pub fn update_mode(&mut self, width: u32) -> bool {
        let next = DisplayMode::from_width(width);
        if next == self.mode {
            return false;
        }
        self.mode = next;
        self.mobile_open = false;
        true
    }

    /// Whether the sidebar is currently open from the user's point of view.
    ///
    /// In `Mobile` mode this is the overlay flag; in `Desktop` mode it is the
    /// inverse of the collapse preference.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        match self.mode {
            DisplayMode::Mobile => self.mobile_open,
            DisplayMode::Desktop => !self.collapsed,
        }
    }
}
