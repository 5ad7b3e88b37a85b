#![forbid(unsafe_code)]

//! Hint labels for keyboard-driven element selection.
//!
//! * [`provider`]: visible actionable element enumeration
//! * [`label`]: deterministic two-letter code allocation
//! * [`engine`]: the session state machine that places markers and resolves input

pub mod engine;
pub mod label;
pub mod provider;

pub use engine::{
    Activation, ClickOptions, ElementActions, HintConfig, HintEngine, HintHost, HintLabel,
    HintOutcome, KeyMatchState, MarkerHandle, MarkerLayer,
};
pub use label::{AlphabetError, HintAlphabet, LabelAllocator};
pub use provider::{
    ContentTree, ElementNode, ElementProvider, RenderState, VisibilityPredicate,
    VisibleElementProvider,
};
