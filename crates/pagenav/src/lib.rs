#![forbid(unsafe_code)]

//! pagenav public facade crate.
//!
//! Re-exports the types an embedder needs to wire a page host to the mode
//! controller, plus a small prelude.
//!
//! ```
//! use pagenav::prelude::*;
//! use std::sync::mpsc;
//!
//! let (tx, _rx) = mpsc::channel::<TabRequest>();
//! let controller = ModeController::new(NavConfig::default(), tx);
//! assert_eq!(controller.mode(), Mode::Normal);
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use pagenav_core::clock::{DeterministicClock, PageClock, SystemClock};
pub use pagenav_core::element::{ActionableElement, ElementId, ElementKind, ElementRole};
pub use pagenav_core::event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use pagenav_core::geometry::{Point, Rect, Viewport, ViewportSource};

// --- Hint re-exports -------------------------------------------------------

pub use pagenav_hints::{
    AlphabetError, ClickOptions, ContentTree, ElementActions, ElementNode, HintAlphabet,
    HintConfig, HintHost, MarkerHandle, MarkerLayer, RenderState,
};

// --- Scroll re-exports -----------------------------------------------------

pub use pagenav_scroll::{
    Axis, Direction, Overflow, ScrollCandidate, ScrollConfig, ScrollHost, ScrollSurface,
};

// --- Tab re-exports --------------------------------------------------------

pub use pagenav_tabs::{
    MemoryTabStrip, TabBridge, TabDirection, TabError, TabId, TabRequest, TabService, TabStrip,
    TabTransport,
};

// --- Runtime re-exports ----------------------------------------------------

pub use pagenav_runtime::{
    FindCapability, FindOptions, FocusHost, HistoryHost, KeyDisposition, Mode, ModeController,
    ModeIndicator, NavConfig, NavHost, QueryBox,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for pagenav embedders.
#[derive(Debug)]
pub enum Error {
    /// Tab request could not be delivered or applied.
    Tab(TabError),
    /// Hint alphabet failed validation.
    Alphabet(AlphabetError),
    /// Host integration error with message.
    Host(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tab(err) => write!(f, "{err}"),
            Self::Alphabet(err) => write!(f, "{err}"),
            Self::Host(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tab(err) => Some(err),
            Self::Alphabet(err) => Some(err),
            Self::Host(_) => None,
        }
    }
}

impl From<TabError> for Error {
    fn from(err: TabError) -> Self {
        Self::Tab(err)
    }
}

impl From<AlphabetError> for Error {
    fn from(err: AlphabetError) -> Self {
        Self::Alphabet(err)
    }
}

/// Standard result type for pagenav APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Build a configuration whose hint codes use `letters`.
pub fn config_with_alphabet(letters: &str) -> Result<NavConfig> {
    let alphabet = HintAlphabet::new(letters)?;
    Ok(NavConfig::default().with_hints(HintConfig::with_alphabet(alphabet)))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Direction, Error, KeyCode, KeyDisposition, KeyEvent, Mode, ModeController, Modifiers,
        NavConfig, NavHost, Result, TabRequest,
    };

    pub use crate::{core, hints, runtime, scroll, tabs};
}

pub use pagenav_core as core;
pub use pagenav_hints as hints;
pub use pagenav_runtime as runtime;
pub use pagenav_scroll as scroll;
pub use pagenav_tabs as tabs;
