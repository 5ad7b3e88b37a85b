#![forbid(unsafe_code)]

//! Core: key events, geometry, the element model, and key sequence buffering.

pub mod clock;
pub mod element;
pub mod event;
pub mod geometry;
pub mod key_sequence;
pub mod logging;
pub mod visibility;

#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
