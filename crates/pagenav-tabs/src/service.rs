#![forbid(unsafe_code)]

//! Host-side tab control service.
//!
//! [`TabService`] applies requests to a [`TabStrip`]. Moving wraps around at
//! both ends. [`TabService::spawn`] drains a channel on a background thread
//! until every sender is dropped, then hands the strip back.

use std::sync::mpsc;
use std::thread;

use tracing::{debug, warn};

use crate::error::{TabError, TabId};
use crate::protocol::{TabDirection, TabRequest};

/// The ordered tabs of one window.
pub trait TabStrip {
    /// Tabs in display order.
    fn tabs(&self) -> Vec<TabId>;

    /// The active tab, if any.
    fn active(&self) -> Option<TabId>;

    /// Make `id` the active tab.
    fn activate(&mut self, id: TabId) -> Result<(), TabError>;

    /// Close `id`.
    fn close(&mut self, id: TabId) -> Result<(), TabError>;
}

/// Applies [`TabRequest`]s to a strip.
#[derive(Debug)]
pub struct TabService<S> {
    strip: S,
}

impl<S: TabStrip> TabService<S> {
    /// Serve `strip`.
    pub fn new(strip: S) -> Self {
        Self { strip }
    }

    /// The served strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Release the strip.
    pub fn into_strip(self) -> S {
        self.strip
    }

    /// Apply one request.
    pub fn handle(&mut self, request: TabRequest) -> Result<(), TabError> {
        let active = self.strip.active().ok_or(TabError::NoActiveTab)?;
        match request {
            TabRequest::MoveTab { direction } => {
                let tabs = self.strip.tabs();
                let index = tabs
                    .iter()
                    .position(|&t| t == active)
                    .ok_or(TabError::UnknownTab(active))?;
                let n = tabs.len();
                let target = match direction {
                    TabDirection::Next => (index + 1) % n,
                    TabDirection::Prev => (index + n - 1) % n,
                };
                debug!(from = index, to = target, "moving tab");
                self.strip.activate(tabs[target])
            }
            TabRequest::CloseTab => {
                debug!(tab = %active, "closing tab");
                self.strip.close(active)
            }
        }
    }

    /// Decode and apply one JSON request.
    pub fn handle_json(&mut self, text: &str) -> Result<(), TabError> {
        let request = TabRequest::from_json(text)?;
        self.handle(request)
    }
}

impl<S: TabStrip + Send + 'static> TabService<S> {
    /// Serve requests from `receiver` on a background thread.
    ///
    /// Failures are logged and skipped. The thread ends when every sender is
    /// dropped and returns the strip.
    pub fn spawn(receiver: mpsc::Receiver<TabRequest>, strip: S) -> thread::JoinHandle<S> {
        thread::spawn(move || {
            let mut service = TabService::new(strip);
            for request in receiver {
                if let Err(err) = service.handle(request) {
                    warn!(?request, error = %err, "tab request failed");
                }
            }
            debug!("tab service channel closed");
            service.into_strip()
        })
    }
}

/// In-memory tab strip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTabStrip {
    tabs: Vec<TabId>,
    active: Option<TabId>,
}

impl MemoryTabStrip {
    /// `count` tabs with ids `0..count`, the first one active.
    #[must_use]
    pub fn with_tabs(count: u64) -> Self {
        let tabs: Vec<TabId> = (0..count).map(TabId).collect();
        let active = tabs.first().copied();
        Self { tabs, active }
    }

    /// Builder: make `id` active if it exists.
    #[must_use]
    pub fn with_active(mut self, id: TabId) -> Self {
        if self.tabs.contains(&id) {
            self.active = Some(id);
        }
        self
    }
}

impl TabStrip for MemoryTabStrip {
    fn tabs(&self) -> Vec<TabId> {
        self.tabs.clone()
    }

    fn active(&self) -> Option<TabId> {
        self.active
    }

    fn activate(&mut self, id: TabId) -> Result<(), TabError> {
        if !self.tabs.contains(&id) {
            return Err(TabError::UnknownTab(id));
        }
        self.active = Some(id);
        Ok(())
    }

    fn close(&mut self, id: TabId) -> Result<(), TabError> {
        let index = self
            .tabs
            .iter()
            .position(|&t| t == id)
            .ok_or(TabError::UnknownTab(id))?;
        self.tabs.remove(index);
        if self.active == Some(id) {
            // Right neighbour takes over, else the new last tab.
            self.active = self
                .tabs
                .get(index)
                .or_else(|| self.tabs.last())
                .copied();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next() -> TabRequest {
        TabRequest::MoveTab {
            direction: TabDirection::Next,
        }
    }

    fn prev() -> TabRequest {
        TabRequest::MoveTab {
            direction: TabDirection::Prev,
        }
    }

    #[test]
    fn next_wraps_to_first() {
        let mut svc = TabService::new(MemoryTabStrip::with_tabs(3).with_active(TabId(2)));
        svc.handle(next()).unwrap();
        assert_eq!(svc.strip().active(), Some(TabId(0)));
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut svc = TabService::new(MemoryTabStrip::with_tabs(3));
        svc.handle(prev()).unwrap();
        assert_eq!(svc.strip().active(), Some(TabId(2)));
        svc.handle(prev()).unwrap();
        assert_eq!(svc.strip().active(), Some(TabId(1)));
    }

    #[test]
    fn single_tab_moves_onto_itself() {
        let mut svc = TabService::new(MemoryTabStrip::with_tabs(1));
        svc.handle(next()).unwrap();
        svc.handle(prev()).unwrap();
        assert_eq!(svc.strip().active(), Some(TabId(0)));
    }

    #[test]
    fn close_picks_right_neighbour_then_left() {
        let mut svc = TabService::new(MemoryTabStrip::with_tabs(3).with_active(TabId(1)));
        svc.handle(TabRequest::CloseTab).unwrap();
        assert_eq!(svc.strip().tabs(), vec![TabId(0), TabId(2)]);
        assert_eq!(svc.strip().active(), Some(TabId(2)));

        svc.handle(TabRequest::CloseTab).unwrap();
        assert_eq!(svc.strip().active(), Some(TabId(0)));
    }

    #[test]
    fn empty_strip_has_no_active_tab() {
        let mut svc = TabService::new(MemoryTabStrip::default());
        assert_eq!(svc.handle(next()), Err(TabError::NoActiveTab));
        assert_eq!(svc.handle(TabRequest::CloseTab), Err(TabError::NoActiveTab));
    }

    #[test]
    fn handle_json_rejects_garbage() {
        let mut svc = TabService::new(MemoryTabStrip::with_tabs(2));
        assert!(matches!(svc.handle_json("{}"), Err(TabError::Malformed(_))));
        svc.handle_json(r#"{"action":"moveTab","direction":"next"}"#)
            .unwrap();
        assert_eq!(svc.strip().active(), Some(TabId(1)));
    }
}
