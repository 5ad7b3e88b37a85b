#![forbid(unsafe_code)]

//! Smooth scrolling while a key is held.
//!
//! [`ScrollAnimator`] owns the live scroll direction and the frame loops that
//! read it. [`select_surface`] decides whether the page or an inner scroll
//! container moves.

pub mod animator;
pub mod direction;
pub mod surface;

pub use animator::{PageJump, ScrollAnimator, ScrollConfig, ScrollStart};
pub use direction::{Axis, Direction};
pub use surface::{Overflow, ScrollCandidate, ScrollHost, ScrollSurface, select_surface};
