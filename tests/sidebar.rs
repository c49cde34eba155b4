//! End-to-end tests of the sidebar controller through the public API.
//!
//! The hosting environment is simulated with recording fakes: elements that
//! track their class lists, a page that tracks the scroll lock, and a shared
//! in-memory preference store the tests can inspect after handing it to the
//! controller.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use horizon_sidebar::storage::COLLAPSED_KEY;
use horizon_sidebar::ui::classes;
use horizon_sidebar::{mount, Element, Page, PreferenceStore, RenderTargets, Result, SidebarError};

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

/// Preference store sharing its map with the test, so persisted values can be
/// asserted after the store has been moved into the controller.
#[derive(Debug, Clone, Default)]
struct SharedStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl SharedStore {
    fn seeded(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

impl PreferenceStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store whose every operation fails, for the silent-degradation path.
#[derive(Debug, Default)]
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(SidebarError::Storage("store unavailable".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(SidebarError::Storage("store unavailable".to_string()))
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

fn sidebar_has(targets: &RenderTargets<FakeElement, FakePage>, class: &str) -> bool {
    targets.sidebar.as_ref().unwrap().has_class(class)
}

fn main_has(targets: &RenderTargets<FakeElement, FakePage>, class: &str) -> bool {
    targets.main_content.as_ref().unwrap().has_class(class)
}

fn overlay_active(targets: &RenderTargets<FakeElement, FakePage>) -> bool {
    targets.wrapper.as_ref().unwrap().has_class(classes::ACTIVE)
        && targets.overlay.as_ref().unwrap().has_class(classes::ACTIVE)
}

fn scroll_locked(targets: &RenderTargets<FakeElement, FakePage>) -> bool {
    targets.page.as_ref().unwrap().locked
}

#[test]
fn fresh_desktop_load_shows_expanded_sidebar() {
    let sidebar = mount(SharedStore::default(), full_targets(), 1024).unwrap();

    assert!(sidebar.is_open());
    assert!(!sidebar_has(sidebar.targets(), classes::COLLAPSED));
    assert!(!main_has(sidebar.targets(), classes::SIDEBAR_COLLAPSED));
}

#[test]
fn persisted_collapse_applies_on_desktop_load() {
    let store = SharedStore::seeded(COLLAPSED_KEY, "true");
    let sidebar = mount(store, full_targets(), 1024).unwrap();

    assert!(!sidebar.is_open());
    assert!(sidebar_has(sidebar.targets(), classes::COLLAPSED));
    assert!(main_has(sidebar.targets(), classes::SIDEBAR_COLLAPSED));
    assert_eq!(
        sidebar.targets().toggle.as_ref().unwrap().icon.as_deref(),
        Some(classes::ICON_COLLAPSED)
    );
}

#[test]
fn mobile_load_starts_closed_regardless_of_preference() {
    let store = SharedStore::seeded(COLLAPSED_KEY, "true");
    let sidebar = mount(store, full_targets(), 500).unwrap();

    assert!(!sidebar.is_open());
    assert!(!overlay_active(sidebar.targets()));
    assert!(!sidebar_has(sidebar.targets(), classes::COLLAPSED));
    assert!(!scroll_locked(sidebar.targets()));
}

#[test]
fn desktop_toggle_round_trip_restores_classes_and_preference() {
    let store = SharedStore::default();
    let mut sidebar = mount(store.clone(), full_targets(), 1024).unwrap();

    sidebar.toggle();
    assert!(sidebar_has(sidebar.targets(), classes::COLLAPSED));
    assert!(main_has(sidebar.targets(), classes::SIDEBAR_COLLAPSED));
    assert_eq!(store.value(COLLAPSED_KEY).as_deref(), Some("true"));
    assert!(!sidebar.is_open());

    sidebar.toggle();
    assert!(!sidebar_has(sidebar.targets(), classes::COLLAPSED));
    assert!(!main_has(sidebar.targets(), classes::SIDEBAR_COLLAPSED));
    assert_eq!(store.value(COLLAPSED_KEY).as_deref(), Some("false"));
    assert!(sidebar.is_open());
}

#[test]
fn mobile_toggle_drives_overlay_and_scroll_lock() {
    let mut sidebar = mount(SharedStore::default(), full_targets(), 500).unwrap();

    sidebar.toggle();
    assert!(sidebar.is_open());
    assert!(overlay_active(sidebar.targets()));
    assert!(scroll_locked(sidebar.targets()));

    sidebar.toggle();
    assert!(!sidebar.is_open());
    assert!(!overlay_active(sidebar.targets()));
    assert!(!scroll_locked(sidebar.targets()));
}

#[test]
fn mobile_toggle_never_touches_the_preference() {
    let store = SharedStore::default();
    let mut sidebar = mount(store.clone(), full_targets(), 500).unwrap();

    sidebar.toggle();
    sidebar.toggle();

    assert_eq!(store.value(COLLAPSED_KEY), None);
}

#[test]
fn close_mobile_is_idempotent() {
    let mut sidebar = mount(SharedStore::default(), full_targets(), 500).unwrap();
    sidebar.open_mobile();

    sidebar.close_mobile();
    let once_active = overlay_active(sidebar.targets());
    let once_locked = scroll_locked(sidebar.targets());

    sidebar.close_mobile();
    assert_eq!(overlay_active(sidebar.targets()), once_active);
    assert_eq!(scroll_locked(sidebar.targets()), once_locked);
    assert!(!once_active);
    assert!(!once_locked);
}

#[test]
fn escape_closes_open_overlay_once() {
    let mut sidebar = mount(SharedStore::default(), full_targets(), 500).unwrap();
    sidebar.open_mobile();
    assert!(scroll_locked(sidebar.targets()));

    sidebar.on_escape();
    assert!(!overlay_active(sidebar.targets()));
    assert!(!scroll_locked(sidebar.targets()));

    // Second escape while already closed changes nothing.
    sidebar.on_escape();
    assert!(!overlay_active(sidebar.targets()));
    assert!(!scroll_locked(sidebar.targets()));
}

#[test]
fn overlay_click_closes_the_overlay() {
    let mut sidebar = mount(SharedStore::default(), full_targets(), 500).unwrap();
    sidebar.open_mobile();

    sidebar.on_overlay_click();
    assert!(!overlay_active(sidebar.targets()));
    assert!(!sidebar.is_open());
}

#[test]
fn collapse_and_expand_are_desktop_only() {
    let store = SharedStore::default();
    let mut sidebar = mount(store.clone(), full_targets(), 500).unwrap();

    sidebar.collapse();
    assert!(!sidebar_has(sidebar.targets(), classes::COLLAPSED));
    assert_eq!(store.value(COLLAPSED_KEY), None);

    let store = SharedStore::default();
    let mut sidebar = mount(store.clone(), full_targets(), 1024).unwrap();

    sidebar.collapse();
    assert!(sidebar_has(sidebar.targets(), classes::COLLAPSED));
    assert_eq!(store.value(COLLAPSED_KEY).as_deref(), Some("true"));

    sidebar.expand();
    assert!(!sidebar_has(sidebar.targets(), classes::COLLAPSED));
    assert_eq!(store.value(COLLAPSED_KEY).as_deref(), Some("false"));
}

#[test]
fn shrinking_while_collapsed_clears_desktop_styling() {
    let store = SharedStore::seeded(COLLAPSED_KEY, "true");
    let mut sidebar = mount(store, full_targets(), 1024).unwrap();

    sidebar.on_resize(500);

    assert!(!overlay_active(sidebar.targets()));
    assert!(!sidebar_has(sidebar.targets(), classes::COLLAPSED));
    assert!(!main_has(sidebar.targets(), classes::SIDEBAR_COLLAPSED));
}

#[test]
fn growing_back_restores_the_persisted_rendering() {
    let store = SharedStore::seeded(COLLAPSED_KEY, "true");
    let mut sidebar = mount(store, full_targets(), 1024).unwrap();

    sidebar.on_resize(500);
    sidebar.on_resize(1024);

    assert!(sidebar_has(sidebar.targets(), classes::COLLAPSED));
    assert!(main_has(sidebar.targets(), classes::SIDEBAR_COLLAPSED));
    assert_eq!(
        sidebar.targets().toggle.as_ref().unwrap().icon.as_deref(),
        Some(classes::ICON_COLLAPSED)
    );
    assert!(!sidebar.is_open());
}

#[test]
fn growing_with_open_overlay_force_closes_it() {
    let mut sidebar = mount(SharedStore::default(), full_targets(), 500).unwrap();
    sidebar.open_mobile();

    sidebar.on_resize(1024);

    assert!(!overlay_active(sidebar.targets()));
    assert!(!scroll_locked(sidebar.targets()));
    // Expanded preference means open on desktop.
    assert!(sidebar.is_open());
}

#[test]
fn mount_requires_the_sidebar_target() {
    let targets: RenderTargets<FakeElement, FakePage> = RenderTargets::default();
    assert!(mount(SharedStore::default(), targets, 1024).is_none());
}

#[test]
fn missing_secondary_targets_degrade_to_noops() {
    let targets: RenderTargets<FakeElement, FakePage> = RenderTargets {
        sidebar: Some(FakeElement::default()),
        ..RenderTargets::default()
    };
    let mut sidebar = mount(SharedStore::default(), targets, 500).unwrap();

    sidebar.toggle();
    sidebar.on_escape();
    sidebar.on_resize(1024);
    sidebar.toggle();

    assert!(sidebar_has(sidebar.targets(), classes::COLLAPSED));
}

#[test]
fn broken_store_falls_back_to_defaults_silently() {
    let mut sidebar = mount(BrokenStore, full_targets(), 1024).unwrap();

    // Failed read defaults to expanded.
    assert!(sidebar.is_open());

    // Failed writes keep the in-memory state authoritative.
    sidebar.toggle();
    assert!(!sidebar.is_open());
    assert!(sidebar_has(sidebar.targets(), classes::COLLAPSED));
}

#[test]
fn preference_survives_a_remount() {
    let store = SharedStore::default();

    let mut sidebar = mount(store.clone(), full_targets(), 1024).unwrap();
    sidebar.collapse();
    drop(sidebar);

    let sidebar = mount(store, full_targets(), 1024).unwrap();
    assert!(!sidebar.is_open());
    assert!(sidebar_has(sidebar.targets(), classes::COLLAPSED));
}
