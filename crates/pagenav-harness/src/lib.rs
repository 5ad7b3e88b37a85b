#![forbid(unsafe_code)]

//! Deterministic test harness for pagenav.
//!
//! - **[`FakePage`]**: an in-memory page implementing every host trait, with
//!   a [`DeterministicClock`](pagenav_core::clock::DeterministicClock),
//!   clamped scrolling, and recorded side effects.
//! - **[`Session`]**: a controller wired to a fake page and a tab channel,
//!   with helpers for typing keys and stepping frames.
//!
//! # Quick Start
//!
//! ```
//! use pagenav_harness::Session;
//!
//! let mut s = Session::tall_page();
//! s.press('j');
//! s.run_frames(10);
//! s.release('j');
//! assert!(s.page.scroll_y() > 0.0);
//! ```
//!
//! Set `PAGENAV_LOG=debug` to see controller logs in test output.

pub mod page;
pub mod session;

use std::sync::Once;

use pagenav_core::logging::{DEFAULT_FILTER, LOG_ENV};
use tracing_subscriber::EnvFilter;

pub use page::{FakeContainer, FakeElement, FakePage};
pub use session::{FRAME, Session};

static INIT: Once = Once::new();

/// Install a test-writer subscriber filtered by `PAGENAV_LOG` (default
/// `warn`). Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
