//! Opt-in tracing bootstrap for hosts that have no subscriber of their own.
//!
//! The engine emits `tracing` events for dataset loads and axis reselects but
//! never installs a subscriber on its own. Hosts that want those events on
//! stderr without wiring up `tracing-subscriber` themselves can enable the
//! `telemetry` feature and call [`init_default_tracing`] once at startup.

/// Installs a compact stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` when the `telemetry` feature is disabled or the host has
/// already installed a global subscriber; the call is a no-op in both cases.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
