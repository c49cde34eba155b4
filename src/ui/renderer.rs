//! Full-state rendering onto the page's render targets.
//!
//! This module translates a [`SidebarState`] snapshot into class mutations on
//! the render targets. Rendering is state-driven and branchless beyond the one
//! mode decision: exactly one of the two branches executes, and each branch
//! writes every class it owns, so repeated applies of the same state are
//! idempotent.
//!
//! # Rendering policy
//!
//! - **Desktop**: set or clear `collapsed` on the sidebar and the matching
//!   `sidebar-collapsed` offset on the main content; clear any mobile `active`
//!   classes and release the scroll lock.
//! - **Mobile**: clear both collapsed classes unconditionally so desktop-only
//!   styling never leaks into mobile view; set or clear `active` on the
//!   wrapper and the backdrop per the overlay flag; hold the scroll lock
//!   exactly while the overlay is open.

use crate::app::modes::DisplayMode;
use crate::app::state::SidebarState;
use crate::ui::classes;
use crate::ui::targets::{Element, Page, RenderTargets};

/// Applies the full sidebar state to the render targets.
///
/// Safe to call with any subset of targets present; missing targets are
/// skipped. Called by the controller whenever the event handler reports a
/// state change.
pub fn apply<E: Element, P: Page>(state: &SidebarState, targets: &mut RenderTargets<E, P>) {
    let _span = tracing::debug_span!("render_sidebar", mode = ?state.mode).entered();

    match state.mode {
        DisplayMode::Desktop => {
            set_class(&mut targets.sidebar, classes::COLLAPSED, state.collapsed);
            set_class(
                &mut targets.main_content,
                classes::SIDEBAR_COLLAPSED,
                state.collapsed,
            );
            set_class(&mut targets.wrapper, classes::ACTIVE, false);
            set_class(&mut targets.overlay, classes::ACTIVE, false);
            set_scroll_lock(targets, false);
        }
        DisplayMode::Mobile => {
            set_class(&mut targets.sidebar, classes::COLLAPSED, false);
            set_class(&mut targets.main_content, classes::SIDEBAR_COLLAPSED, false);
            set_class(&mut targets.wrapper, classes::ACTIVE, state.mobile_open);
            set_class(&mut targets.overlay, classes::ACTIVE, state.mobile_open);
            set_scroll_lock(targets, state.mobile_open);
        }
    }
}

/// Points the desktop toggle's chevron at the collapse direction.
///
/// Collapsed shows a right-facing chevron (expand me), expanded shows a
/// left-facing one. No-op when the toggle target is absent.
pub fn refresh_toggle_icon<E: Element, P: Page>(
    state: &SidebarState,
    targets: &mut RenderTargets<E, P>,
) {
    if let Some(toggle) = targets.toggle.as_mut() {
        let icon = if state.collapsed {
            classes::ICON_COLLAPSED
        } else {
            classes::ICON_EXPANDED
        };
        toggle.set_icon(icon);
    }
}

fn set_class<E: Element>(target: &mut Option<E>, name: &str, present: bool) {
    if let Some(element) = target.as_mut() {
        if present {
            element.add_class(name);
        } else {
            element.remove_class(name);
        }
    }
}

fn set_scroll_lock<E: Element, P: Page>(targets: &mut RenderTargets<E, P>, locked: bool) {
    if let Some(page) = targets.page.as_mut() {
        page.set_scroll_locked(locked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[derive(Debug, Default)]
    struct FakeElement {
        classes: BTreeSet<String>,
        icon: Option<String>,
    }

    impl Element for FakeElement {
        fn add_class(&mut self, name: &str) {
            self.classes.insert(name.to_string());
        }

        fn remove_class(&mut self, name: &str) {
            self.classes.remove(name);
        }

        fn has_class(&self, name: &str) -> bool {
            self.classes.contains(name)
        }

        fn set_icon(&mut self, icon: &str) {
            self.icon = Some(icon.to_string());
        }
    }

    #[derive(Debug, Default)]
    struct FakePage {
        locked: bool,
    }

    impl Page for FakePage {
        fn set_scroll_locked(&mut self, locked: bool) {
            self.locked = locked;
        }
    }

    fn full_targets() -> RenderTargets<FakeElement, FakePage> {
        RenderTargets {
            sidebar: Some(FakeElement::default()),
            wrapper: Some(FakeElement::default()),
            toggle: Some(FakeElement::default()),
            overlay: Some(FakeElement::default()),
            main_content: Some(FakeElement::default()),
            page: Some(FakePage::default()),
        }
    }

    #[test]
    fn desktop_collapsed_sets_both_collapse_classes() {
        let state = SidebarState::new(DisplayMode::Desktop, true);
        let mut targets = full_targets();

        apply(&state, &mut targets);

        assert!(targets.sidebar.as_ref().unwrap().has_class(classes::COLLAPSED));
        assert!(targets
            .main_content
            .as_ref()
            .unwrap()
            .has_class(classes::SIDEBAR_COLLAPSED));
        assert!(!targets.wrapper.as_ref().unwrap().has_class(classes::ACTIVE));
        assert!(!targets.page.as_ref().unwrap().locked);
    }

    #[test]
    fn desktop_expanded_clears_collapse_classes() {
        let mut targets = full_targets();
        apply(&SidebarState::new(DisplayMode::Desktop, true), &mut targets);
        apply(&SidebarState::new(DisplayMode::Desktop, false), &mut targets);

        assert!(!targets.sidebar.as_ref().unwrap().has_class(classes::COLLAPSED));
        assert!(!targets
            .main_content
            .as_ref()
            .unwrap()
            .has_class(classes::SIDEBAR_COLLAPSED));
    }

    #[test]
    fn mobile_open_activates_overlay_and_locks_scroll() {
        let mut state = SidebarState::new(DisplayMode::Mobile, true);
        state.mobile_open = true;
        let mut targets = full_targets();

        apply(&state, &mut targets);

        assert!(targets.wrapper.as_ref().unwrap().has_class(classes::ACTIVE));
        assert!(targets.overlay.as_ref().unwrap().has_class(classes::ACTIVE));
        assert!(targets.page.as_ref().unwrap().locked);
        // Desktop-only styling must not leak into mobile view.
        assert!(!targets.sidebar.as_ref().unwrap().has_class(classes::COLLAPSED));
    }

    #[test]
    fn mobile_branch_clears_stale_collapse_classes() {
        let mut targets = full_targets();
        apply(&SidebarState::new(DisplayMode::Desktop, true), &mut targets);

        let state = SidebarState::new(DisplayMode::Mobile, true);
        apply(&state, &mut targets);

        assert!(!targets.sidebar.as_ref().unwrap().has_class(classes::COLLAPSED));
        assert!(!targets
            .main_content
            .as_ref()
            .unwrap()
            .has_class(classes::SIDEBAR_COLLAPSED));
        assert!(!targets.page.as_ref().unwrap().locked);
    }

    #[test]
    fn icon_tracks_collapse_direction() {
        let mut targets = full_targets();

        refresh_toggle_icon(&SidebarState::new(DisplayMode::Desktop, true), &mut targets);
        assert_eq!(
            targets.toggle.as_ref().unwrap().icon.as_deref(),
            Some(classes::ICON_COLLAPSED)
        );

        refresh_toggle_icon(&SidebarState::new(DisplayMode::Desktop, false), &mut targets);
        assert_eq!(
            targets.toggle.as_ref().unwrap().icon.as_deref(),
            Some(classes::ICON_EXPANDED)
        );
    }

    #[test]
    fn rendering_with_no_targets_is_a_noop() {
        let mut state = SidebarState::new(DisplayMode::Mobile, false);
        state.mobile_open = true;
        let mut targets: RenderTargets<FakeElement, FakePage> = RenderTargets::default();

        apply(&state, &mut targets);
        refresh_toggle_icon(&state, &mut targets);
    }
}
