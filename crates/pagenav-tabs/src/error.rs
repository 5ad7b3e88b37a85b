#![forbid(unsafe_code)]

//! Tab control errors.

use std::fmt;

/// Host handle for one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab#{}", self.0)
    }
}

/// Errors raised on either side of the tab protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    /// The service end of the channel is gone.
    Disconnected,
    /// The window has no active tab.
    NoActiveTab,
    /// The active tab is not part of the strip.
    UnknownTab(TabId),
    /// A message could not be decoded.
    Malformed(String),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::Disconnected => write!(f, "tab service disconnected"),
            TabError::NoActiveTab => write!(f, "no active tab"),
            TabError::UnknownTab(id) => write!(f, "unknown tab: {id}"),
            TabError::Malformed(msg) => write!(f, "malformed tab request: {msg}"),
        }
    }
}

impl std::error::Error for TabError {}

impl From<serde_json::Error> for TabError {
    fn from(e: serde_json::Error) -> Self {
        TabError::Malformed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(TabError::Disconnected.to_string(), "tab service disconnected");
        assert_eq!(
            TabError::UnknownTab(TabId(7)).to_string(),
            "unknown tab: tab#7"
        );
    }
}
