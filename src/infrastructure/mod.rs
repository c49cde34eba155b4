//! Infrastructure layer for filesystem and environment interactions.
//!
//! Currently limited to resolving the default location of the preference file.

pub mod paths;

pub use paths::{default_preferences_file, get_data_dir};
