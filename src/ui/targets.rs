//! Render-target abstraction over the hosting page.
//!
//! This module defines the traits the controller renders through and the
//! [`RenderTargets`] container that groups them. The hosting environment
//! supplies implementations bound to its real elements; tests supply recording
//! fakes. The controller never creates or destroys targets, it only toggles a
//! small set of boolean-like classes and one scroll-lock flag.
//!
//! Every target is optional. A page that lacks, say, the backdrop element
//! simply gets no backdrop mutations; nothing errors.

/// A mutable UI element the renderer toggles classes on.
///
/// Implementations map directly onto the host's element handles. The
/// controller assumes all methods are cheap and synchronous.
pub trait Element {
    /// Adds a class if not already present.
    fn add_class(&mut self, name: &str);

    /// Removes a class if present.
    fn remove_class(&mut self, name: &str);

    /// Returns whether the class is currently present.
    fn has_class(&self, name: &str) -> bool;

    /// Replaces the element's icon glyph with the given icon class string.
    ///
    /// Only meaningful for the desktop toggle control; other targets may
    /// ignore the call.
    fn set_icon(&mut self, icon: &str);
}

/// The page-level surface owning the scroll-lock flag.
///
/// Maps onto the document body in a browser host. Locking is tied 1:1 to the
/// mobile overlay being open.
pub trait Page {
    /// Enables or disables page scrolling.
    fn set_scroll_locked(&mut self, locked: bool);
}

/// The set of optional render targets the controller mutates.
///
/// Mirrors the dashboard layout: the sidebar element itself, the wrapper used
/// for the mobile slide-in, the desktop toggle control (for its chevron icon),
/// the dimming backdrop, and the main content region. The page handle carries
/// the scroll lock.
///
/// Any missing target degrades the corresponding mutations to no-ops.
#[derive(Debug)]
pub struct RenderTargets<E: Element, P: Page> {
    /// Outer sidebar element; receives the `collapsed` class on desktop.
    pub sidebar: Option<E>,

    /// Wrapper used for the mobile slide-in; receives the `active` class.
    pub wrapper: Option<E>,

    /// Desktop toggle control; receives chevron icon updates.
    pub toggle: Option<E>,

    /// Dimming backdrop behind the mobile overlay; receives the `active` class.
    pub overlay: Option<E>,

    /// Main content region; receives the `sidebar-collapsed` offset class.
    pub main_content: Option<E>,

    /// Page-level handle for the scroll lock.
    pub page: Option<P>,
}

impl<E: Element, P: Page> Default for RenderTargets<E, P> {
    /// An entirely empty target set; every render becomes a no-op.
    fn default() -> Self {
        Self {
            sidebar: None,
            wrapper: None,
            toggle: None,
            overlay: None,
            main_content: None,
            page: None,
        }
    }
}

impl<E: Element, P: Page> RenderTargets<E, P> {
    /// Returns whether the primary sidebar target is present.
    ///
    /// Controller construction is conditioned on this: pages without a sidebar
    /// element get no controller at all.
    #[must_use]
    pub const fn has_sidebar(&self) -> bool {
        self.sidebar.is_some()
    }
}
