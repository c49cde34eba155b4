//! Display mode state types for the sidebar.
//!
//! This module defines the device-size classification that governs which parts
//! of the sidebar state are meaningful and which rendering branch executes.
//!
//! # State Machine
//!
//! The sidebar operates in one of two display modes:
//! - **Desktop**: the sidebar is docked; the collapsed preference applies
//! - **Mobile**: the sidebar is an off-canvas overlay; only the open flag applies
//!
//! The mode is derived purely from the viewport width against a fixed
//! breakpoint. It is recomputed on every resize event and never persisted.

/// Viewport widths strictly below this value are classified as [`DisplayMode::Mobile`].
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Device-size classification governing sidebar behavior.
///
/// Determines which state fields are meaningful (the collapsed preference in
/// `Desktop`, the overlay open flag in `Mobile`) and which rendering branch
/// runs. Rendering logic consults the mode first and applies only the state
/// relevant to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Docked sidebar alongside the main content.
    ///
    /// The persisted collapsed preference controls whether the sidebar renders
    /// in its narrow icon-only form.
    Desktop,

    /// Off-canvas sidebar shown above the page content with a dimming backdrop.
    ///
    /// The transient open flag controls overlay visibility. The collapsed
    /// preference has no visual meaning in this mode.
    Mobile,
}

impl DisplayMode {
    /// Classifies a viewport width against [`MOBILE_BREAKPOINT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use horizon_sidebar::app::DisplayMode;
    ///
    /// assert_eq!(DisplayMode::from_width(1024), DisplayMode::Desktop);
    /// assert_eq!(DisplayMode::from_width(500), DisplayMode::Mobile);
    /// ```
    #[must_use]
    pub const fn from_width(width: u32) -> Self {
        if width < MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Returns `true` for [`DisplayMode::Mobile`].
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}
