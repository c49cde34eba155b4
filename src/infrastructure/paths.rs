//! Filesystem locations for the default preference store.
//!
//! This module resolves where the JSON preference file lives when the host
//! does not configure an explicit path. Resolution follows the XDG convention
//! with a `HOME` fallback, and a relative last resort for environments that
//! define neither.

use std::path::PathBuf;

/// Returns the data directory for sidebar preference storage.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/horizon`
/// 2. `$HOME/.local/share/horizon`
/// 3. `.horizon` relative to the working directory
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("horizon");
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("horizon");
        }
    }
    PathBuf::from(".horizon")
}

/// Returns the default path of the JSON preference file.
#[must_use]
pub fn default_preferences_file() -> PathBuf {
    get_data_dir().join("sidebar.json")
}
