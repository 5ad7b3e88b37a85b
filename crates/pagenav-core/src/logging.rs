#![forbid(unsafe_code)]

//! Optional structured logging.
//!
//! With the `tracing` feature the `trace!`, `debug!` and `warn!` macros are
//! the `tracing` ones; without it they expand to nothing, so core stays free
//! of a logging dependency. Higher crates depend on `tracing` directly.
//!
//! `tracing-json` adds [`install_json_subscriber`] for hosts that want
//! newline-delimited JSON logs without wiring a subscriber themselves.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// Expands to nothing without the `tracing` feature.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing without the `tracing` feature.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing without the `tracing` feature.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// Environment variable holding filter directives, e.g. `pagenav_runtime=debug`.
pub const LOG_ENV: &str = "PAGENAV_LOG";

/// Filter used when [`LOG_ENV`] is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a global JSON subscriber filtered by [`LOG_ENV`].
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn install_json_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
