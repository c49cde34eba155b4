//! The sidebar controller owning state, store, and render targets.
//!
//! This module wires the pure event handler to its collaborators: every public
//! operation builds an [`Event`], runs it through
//! [`handle_event`](super::handle_event), re-renders if asked to, and executes
//! the returned actions against the injected preference store and render
//! targets.
//!
//! The controller is explicitly constructed and explicitly owned by the
//! hosting page-composition layer; nothing here reaches for ambient globals.
//! The host's event-dispatch mechanism is an external collaborator that calls
//! the `on_*` entry points.

use crate::app::actions::Action;
use crate::app::handler::{handle_event, Event};
use crate::app::modes::DisplayMode;
use crate::app::state::SidebarState;
use crate::storage::backend::{PreferenceStore, COLLAPSED_KEY};
use crate::ui::renderer;
use crate::ui::targets::{Element, Page, RenderTargets};

/// Owns the sidebar state machine and mediates between the persisted
/// preference store and the rendered layout.
///
/// Created once per page load (see [`mount`](crate::mount)) and held for the
/// page's lifetime. All operations are synchronous, total, and safe regardless
/// of the current mode; missing render targets degrade to no-ops.
pub struct SidebarController<S, E, P>
where
    S: PreferenceStore,
    E: Element,
    P: Page,
{
    state: SidebarState,
    store: S,
    targets: RenderTargets<E, P>,
}

impl<S, E, P> SidebarController<S, E, P>
where
    S: PreferenceStore,
    E: Element,
    P: Page,
{
    /// Constructs the controller and applies the initial rendering.
    ///
    /// The collapse preference is loaded from the store (absent key or store
    /// failure reads as `false`), the display mode is derived from
    /// `viewport_width`, and the state is rendered immediately: in `Mobile`
    /// mode the sidebar starts fully closed regardless of the stored
    /// preference; in `Desktop` mode the stored preference is applied and the
    /// toggle icon set to match.
    pub fn new(store: S, targets: RenderTargets<E, P>, viewport_width: u32) -> Self {
        let collapsed = load_preference(&store);
        let mode = DisplayMode::from_width(viewport_width);

        tracing::debug!(?mode, collapsed, "sidebar controller created");

        let mut controller = Self {
            state: SidebarState::new(mode, collapsed),
            store,
            targets,
        };

        renderer::apply(&controller.state, &mut controller.targets);
        if !mode.is_mobile() {
            renderer::refresh_toggle_icon(&controller.state, &mut controller.targets);
        }

        controller
    }

    /// Mode-dependent toggle.
    ///
    /// In `Mobile` mode flips the overlay open/closed (with the matching
    /// scroll-lock side effect); in `Desktop` mode flips the collapse
    /// preference, persists it, and updates the toggle icon.
    pub fn toggle(&mut self) {
        self.dispatch(&Event::ToggleSidebar);
    }

    /// Opens the mobile overlay. Idempotent; no-op outside `Mobile` mode.
    pub fn open_mobile(&mut self) {
        self.dispatch(&Event::OpenMobile);
    }

    /// Closes the mobile overlay. Idempotent; no-op outside `Mobile` mode.
    pub fn close_mobile(&mut self) {
        self.dispatch(&Event::CloseMobile);
    }

    /// Collapses the sidebar and persists the preference. No-op in `Mobile` mode.
    pub fn collapse(&mut self) {
        self.dispatch(&Event::Collapse);
    }

    /// Expands the sidebar and persists the preference. No-op in `Mobile` mode.
    pub fn expand(&mut self) {
        self.dispatch(&Event::Expand);
    }

    /// Whether the sidebar is currently open: the overlay flag in `Mobile`
    /// mode, the inverse of the collapse preference in `Desktop` mode.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Re-derives the display mode from the new viewport width.
    ///
    /// If the mode changed, the mobile overlay is forced closed and the state
    /// appropriate to the new mode is re-applied, including the icon refresh
    /// when entering `Desktop`. Same-mode resizes do nothing.
    pub fn on_resize(&mut self, width: u32) {
        self.dispatch(&Event::Resized { width });
    }

    /// Backdrop click entry point: closes the overlay.
    pub fn on_overlay_click(&mut self) {
        self.dispatch(&Event::OverlayClicked);
    }

    /// Escape-key entry point: closes the overlay only when in `Mobile` mode
    /// with the overlay open.
    pub fn on_escape(&mut self) {
        self.dispatch(&Event::EscapePressed);
    }

    /// Read-only view of the current state, for hosts that surface it.
    #[must_use]
    pub const fn state(&self) -> &SidebarState {
        &self.state
    }

    /// Read-only view of the render targets, mainly for assertions in tests.
    #[must_use]
    pub const fn targets(&self) -> &RenderTargets<E, P> {
        &self.targets
    }

    /// Runs one event through the handler and executes its output.
    fn dispatch(&mut self, event: &Event) {
        let (render, actions) = handle_event(&mut self.state, event);

        if render {
            renderer::apply(&self.state, &mut self.targets);
        }

        for action in actions {
            match action {
                Action::PersistPreference(collapsed) => self.persist(collapsed),
                Action::RefreshToggleIcon => {
                    renderer::refresh_toggle_icon(&self.state, &mut self.targets);
                }
            }
        }
    }

    /// Writes the preference, absorbing store failures.
    ///
    /// The in-memory state stays authoritative for the rest of the page's
    /// lifetime; a failed write only costs durability across reloads.
    fn persist(&mut self, collapsed: bool) {
        let value = if collapsed { "true" } else { "false" };
        if let Err(e) = self.store.set(COLLAPSED_KEY, value) {
            tracing::warn!(error = %e, "failed to persist sidebar preference");
        }
    }
}

/// Loads the collapse preference, treating absence and failure as `false`.
fn load_preference<S: PreferenceStore>(store: &S) -> bool {
    match store.get(COLLAPSED_KEY) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read sidebar preference, defaulting");
            false
        }
    }
}
