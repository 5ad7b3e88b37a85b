#![forbid(unsafe_code)]

//! Tab control.
//!
//! The page side sends [`TabRequest`]s through a [`TabBridge`]; the host side
//! runs a [`TabService`] that applies them to its [`TabStrip`]. Delivery is
//! fire-and-forget: nothing is returned to the page.

pub mod bridge;
pub mod error;
pub mod protocol;
pub mod service;

pub use bridge::{TabBridge, TabTransport};
pub use error::{TabError, TabId};
pub use protocol::{TabDirection, TabRequest};
pub use service::{MemoryTabStrip, TabService, TabStrip};
