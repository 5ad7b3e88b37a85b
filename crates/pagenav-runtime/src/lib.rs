#![forbid(unsafe_code)]

//! Runtime: the mode controller every key event enters first.
//!
//! [`ModeController`] gates input by [`Mode`] and sub-component activity,
//! and dispatches Normal-mode keys through a fixed command table to the hint
//! engine, the scroll animator, the tab bridge, and the [`SearchAdapter`].

pub mod command;
pub mod config;
pub mod controller;
pub mod host;
pub mod mode;
pub mod search;

pub use command::Command;
pub use config::NavConfig;
pub use controller::{KeyDisposition, ModeController};
pub use host::{
    FindCapability, FindOptions, FocusHost, HistoryHost, ModeIndicator, NavHost, QueryBox,
};
pub use mode::Mode;
pub use search::SearchAdapter;
