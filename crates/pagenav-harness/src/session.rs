#![forbid(unsafe_code)]

//! A controller, a fake page, and a tab channel wired together.

use std::sync::mpsc;
use std::time::Duration;

use pagenav_core::event::{KeyCode, KeyEvent};
use pagenav_runtime::{KeyDisposition, ModeController, NavConfig};
use pagenav_tabs::TabRequest;

use crate::init_test_logging;
use crate::page::FakePage;

/// Time between animation frames.
pub const FRAME: Duration = Duration::from_millis(16);

/// End-to-end driver.
#[derive(Debug)]
pub struct Session {
    /// The page under test.
    pub page: FakePage,
    /// The controller under test.
    pub controller: ModeController<mpsc::Sender<TabRequest>>,
    tabs: mpsc::Receiver<TabRequest>,
}

impl Session {
    /// Drive `page` with the default configuration.
    #[must_use]
    pub fn new(page: FakePage) -> Self {
        Self::with_config(page, NavConfig::default())
    }

    /// Drive `page` with `config`.
    #[must_use]
    pub fn with_config(page: FakePage, config: NavConfig) -> Self {
        init_test_logging();
        let (tx, tabs) = mpsc::channel();
        Self {
            page,
            controller: ModeController::new(config, tx),
            tabs,
        }
    }

    /// An 800 × 600 viewport over an 800 × 5000 document.
    #[must_use]
    pub fn tall_page() -> Self {
        Self::new(FakePage::new(800.0, 600.0).with_document_size(800.0, 5000.0))
    }

    /// Deliver one event. Characters the controller passes through are typed
    /// into the page.
    pub fn key(&mut self, event: KeyEvent) -> KeyDisposition {
        let disposition = self.controller.handle_key(&mut self.page, &event);
        if disposition == KeyDisposition::PassThrough && !event.is_release() && !event.ctrl() {
            if let Some(c) = event.as_char() {
                self.page.type_char(c);
            }
        }
        disposition
    }

    /// Press a character key.
    pub fn press(&mut self, c: char) -> KeyDisposition {
        self.key(KeyEvent::char(c))
    }

    /// Release a character key.
    pub fn release(&mut self, c: char) -> KeyDisposition {
        self.key(KeyEvent::char(c).released())
    }

    /// Press and release each character of `text` in turn.
    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.press(c);
            self.release(c);
        }
    }

    /// Press Escape.
    pub fn escape(&mut self) -> KeyDisposition {
        self.key(KeyEvent::new(KeyCode::Escape))
    }

    /// Press Enter.
    pub fn enter(&mut self) -> KeyDisposition {
        self.key(KeyEvent::new(KeyCode::Enter))
    }

    /// Advance one [`FRAME`] and run it. Returns whether another frame is
    /// needed.
    pub fn frame(&mut self) -> bool {
        self.page.advance(FRAME);
        self.controller.on_frame(&mut self.page)
    }

    /// Run `n` frames.
    pub fn run_frames(&mut self, n: usize) {
        for _ in 0..n {
            self.frame();
        }
    }

    /// Tab requests sent since the last call.
    pub fn sent_tabs(&self) -> Vec<TabRequest> {
        self.tabs.try_iter().collect()
    }
}
