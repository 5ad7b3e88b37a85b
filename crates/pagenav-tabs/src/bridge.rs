#![forbid(unsafe_code)]

//! Page-side sender of tab requests.

use std::sync::mpsc;

use tracing::debug;

use crate::error::TabError;
use crate::protocol::{TabDirection, TabRequest};

/// Delivers a request to the tab service. At most once, no retry.
pub trait TabTransport {
    /// Hand `request` to the service.
    fn send(&self, request: TabRequest) -> Result<(), TabError>;
}

impl TabTransport for mpsc::Sender<TabRequest> {
    fn send(&self, request: TabRequest) -> Result<(), TabError> {
        mpsc::Sender::send(self, request).map_err(|_| TabError::Disconnected)
    }
}

/// Sends the JSON encoding, for services across a process boundary.
impl TabTransport for mpsc::Sender<String> {
    fn send(&self, request: TabRequest) -> Result<(), TabError> {
        let json = request.to_json()?;
        mpsc::Sender::send(self, json).map_err(|_| TabError::Disconnected)
    }
}

/// Façade over a [`TabTransport`].
#[derive(Debug, Clone)]
pub struct TabBridge<T> {
    transport: T,
}

impl<T: TabTransport> TabBridge<T> {
    /// Wrap a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Activate the next tab.
    pub fn move_next(&self) -> Result<(), TabError> {
        self.send(TabRequest::MoveTab {
            direction: TabDirection::Next,
        })
    }

    /// Activate the previous tab.
    pub fn move_prev(&self) -> Result<(), TabError> {
        self.send(TabRequest::MoveTab {
            direction: TabDirection::Prev,
        })
    }

    /// Close the active tab.
    pub fn close_active(&self) -> Result<(), TabError> {
        self.send(TabRequest::CloseTab)
    }

    fn send(&self, request: TabRequest) -> Result<(), TabError> {
        debug!(?request, "tab request");
        self.transport.send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sends_typed_requests() {
        let (tx, rx) = mpsc::channel::<TabRequest>();
        let bridge = TabBridge::new(tx);
        bridge.move_next().unwrap();
        bridge.move_prev().unwrap();
        bridge.close_active().unwrap();

        let got: Vec<TabRequest> = rx.try_iter().collect();
        assert_eq!(
            got,
            vec![
                TabRequest::MoveTab {
                    direction: TabDirection::Next
                },
                TabRequest::MoveTab {
                    direction: TabDirection::Prev
                },
                TabRequest::CloseTab,
            ]
        );
    }

    #[test]
    fn sends_json_requests() {
        let (tx, rx) = mpsc::channel::<String>();
        TabBridge::new(tx).close_active().unwrap();
        assert_eq!(rx.try_recv().unwrap(), r#"{"action":"closeTab"}"#);
    }

    #[test]
    fn dropped_service_is_disconnected() {
        let (tx, rx) = mpsc::channel::<TabRequest>();
        drop(rx);
        assert_eq!(TabBridge::new(tx).move_next(), Err(TabError::Disconnected));
    }
}
