//! Structured logging for the sidebar controller.
//!
//! Every layer of the crate instruments itself with `tracing` spans and
//! events: the event handler records each transition, the renderer each
//! apply, and the storage backends each read and write. This module provides
//! an optional subscriber setup for hosts that do not install their own.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` entry in the host-provided configuration
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
