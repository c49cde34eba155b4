//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber for hosts that want the
//! controller's spans and events on stderr. Library consumers with their own
//! subscriber can skip it entirely; the crate only emits through the `tracing`
//! facade.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes a stderr tracing subscriber.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable (standard `EnvFilter` override)
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
/// If another subscriber is already installed the call is silently ignored.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
