//! Horizon sidebar: the collapsible, responsive sidebar controller of the
//! Horizon hotel-management dashboard.
//!
//! The crate implements a single self-contained UI state machine that owns the
//! sidebar's visibility and collapse state, mediates between a persisted
//! preference store and the rendered layout, and adapts behavior across two
//! device-size regimes (desktop vs. mobile).
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Hosting page composition layer (external)          │  ← Event dispatch
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - Controller ownership                             │
//! └─────────────────────────────────────────────────────┘
//!         │                            │
//! ┌───────────────────┐   ┌───────────────────┐
//! │ UI Layer (ui/)    │   │ Storage (storage/)│
//! │ - Render targets  │   │ - Preference trait│
//! │ - Class toggling  │   │ - JSON / memory   │
//! └───────────────────┘   └───────────────────┘
//!         │                            │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: sidebar state machine with event/action model and controller
//! - [`domain`]: error types
//! - [`infrastructure`]: platform-specific utilities (paths)
//! - [`storage`]: preference persistence trait and backends
//! - [`ui`]: render-target abstraction and state-driven rendering
//! - [`observability`]: optional tracing subscriber setup
//!
//! # Lifecycle
//!
//! 1. The host gathers its render targets and viewport width
//! 2. [`mount`] constructs a [`SidebarController`] if the sidebar target
//!    exists, loading the persisted collapse preference and applying the
//!    initial rendering
//! 3. The host wires its event dispatch (clicks, resize, keydown) to the
//!    controller's operations
//! 4. Every operation runs synchronously to completion: state transition,
//!    re-render, persistence
//!
//! # Example
//!
//! ```
//! use horizon_sidebar::storage::MemoryPreferences;
//! use horizon_sidebar::ui::{Element, Page, RenderTargets};
//! use horizon_sidebar::mount;
//!
//! // A host-side element handle; real hosts wrap their DOM bindings.
//! #[derive(Default)]
//! struct Handle(std::collections::BTreeSet<String>);
//!
//! impl Element for Handle {
//!     fn add_class(&mut self, name: &str) {
//!         self.0.insert(name.to_string());
//!     }
//!     fn remove_class(&mut self, name: &str) {
//!         self.0.remove(name);
//!     }
//!     fn has_class(&self, name: &str) -> bool {
//!         self.0.contains(name)
//!     }
//!     fn set_icon(&mut self, _icon: &str) {}
//! }
//!
//! #[derive(Default)]
//! struct Body;
//!
//! impl Page for Body {
//!     fn set_scroll_locked(&mut self, _locked: bool) {}
//! }
//!
//! let targets: RenderTargets<Handle, Body> = RenderTargets {
//!     sidebar: Some(Handle::default()),
//!     ..RenderTargets::default()
//! };
//!
//! let mut sidebar = mount(MemoryPreferences::new(), targets, 1024)
//!     .expect("sidebar target is present");
//!
//! assert!(sidebar.is_open());
//! sidebar.toggle();
//! assert!(!sidebar.is_open());
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, DisplayMode, Event, SidebarController, SidebarState};
pub use domain::{Result, SidebarError};
pub use storage::{JsonPreferences, MemoryPreferences, PreferenceStore};
pub use ui::{Element, Page, RenderTargets};

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Controller configuration provided by the hosting page.
///
/// Hosts pass configuration as a plain string map; [`Config::from_map`]
/// extracts typed values with fallback defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicit path for the JSON preference file.
    ///
    /// When unset, [`default_store`] falls back to the platform data
    /// directory (see [`infrastructure::paths`]).
    pub preferences_path: Option<String>,

    /// Tracing level for the optional stderr subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// Unknown keys are ignored; missing keys fall back to defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use horizon_sidebar::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert!(config.preferences_path.is_none());
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        Self {
            preferences_path: config.get("preferences_path").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Opens the JSON preference store at the configured or default location.
///
/// # Errors
///
/// Returns an error if the preference file exists but cannot be read or
/// parsed, or if its parent directory cannot be created.
pub fn default_store(config: &Config) -> Result<JsonPreferences> {
    let path = config
        .preferences_path
        .as_ref()
        .map_or_else(infrastructure::paths::default_preferences_file, |p| {
            PathBuf::from(p)
        });
    JsonPreferences::new(path)
}

/// Constructs the sidebar controller for a page, if the page has a sidebar.
///
/// Returns `None` when the primary sidebar target is absent: the component
/// simply does not exist for that page. Otherwise the controller is created
/// with the persisted preference loaded and the initial rendering applied.
pub fn mount<S, E, P>(
    store: S,
    targets: RenderTargets<E, P>,
    viewport_width: u32,
) -> Option<SidebarController<S, E, P>>
where
    S: PreferenceStore,
    E: Element,
    P: Page,
{
    if !targets.has_sidebar() {
        tracing::debug!("no sidebar target on this page, skipping controller");
        return None;
    }

    Some(SidebarController::new(store, targets, viewport_width))
}
