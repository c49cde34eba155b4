//! Visual class and icon vocabulary shared between the renderer and the host
//! stylesheet.
//!
//! These names are a contract with the dashboard's CSS; the renderer only ever
//! adds and removes this fixed set.

/// Narrow icon-only rendering of the sidebar, desktop mode only.
pub const COLLAPSED: &str = "collapsed";

/// Complementary class on the main content region that releases the horizontal
/// space reserved for the expanded sidebar.
pub const SIDEBAR_COLLAPSED: &str = "sidebar-collapsed";

/// Marks the sidebar wrapper and the backdrop as visible in mobile mode.
pub const ACTIVE: &str = "active";

/// Chevron pointing into the page: shown while the sidebar is expanded.
pub const ICON_EXPANDED: &str = "bi bi-chevron-left";

/// Chevron pointing out of the page: shown while the sidebar is collapsed.
pub const ICON_COLLAPSED: &str = "bi bi-chevron-right";
