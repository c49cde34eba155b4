//! Error types for the sidebar controller.
//!
//! This module defines the centralized error type [`SidebarError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Note that the controller's public operations never surface these errors: the
//! component is total, so preference-store failures are logged and absorbed at the
//! controller boundary. The error type exists for the storage backends and
//! configuration parsing, where embedding hosts may want the detail.

use thiserror::Error;

/// The main error type for sidebar operations.
///
/// This enum consolidates the error conditions that can occur beneath the
/// controller's total public surface: preference-store I/O, serialization of the
/// preference file, and configuration parsing. Variants wrap underlying errors
/// from external crates using `#[from]` where a direct conversion exists.
///
/// # Examples
///
/// ```
/// use horizon_sidebar::domain::SidebarError;
///
/// fn validate_config() -> Result<(), SidebarError> {
///     Err(SidebarError::Config("missing preferences_path".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum SidebarError {
    /// Preference store operation failed.
    ///
    /// Occurs when reading from or writing to the preference backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for sidebar operations.
///
/// This is a type alias for `std::result::Result<T, SidebarError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, SidebarError>;
