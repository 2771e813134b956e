//! Log output for adapters embedding the engine.
//!
//! The engine emits `tracing` events under the `deskcalc` target: `debug`
//! for computations, errors and memory/history changes, `trace` for every
//! keystroke. The `RUST_LOG` environment variable takes precedence over the
//! configured filter.

use crate::config::LoggingConfig;
use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Build the filter: `RUST_LOG` if set, otherwise the configured directive.
pub fn filter_for(config: &LoggingConfig) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&config.default)
    }
}

/// Install a compact fmt subscriber.
///
/// Only the first call takes effect. If the host already installed a global
/// subscriber, this leaves it in place.
pub fn init(config: &LoggingConfig) {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .with_filter(filter_for(config));

        // Err means another subscriber is already installed.
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
