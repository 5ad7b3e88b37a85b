#![forbid(unsafe_code)]

//! The single entry point for key events.
//!
//! [`ModeController::handle_key`] decides, per keystroke, whether the key is
//! consumed for navigation or passed through to the page. Checks run in a
//! fixed order:
//!
//! 1. Releases go to the scroll animator and always pass through.
//! 2. Keys held with a passthrough modifier pass through.
//! 3. An open hint session consumes the key.
//! 4. With the query box focused, Enter submits; Escape hides the box and
//!    continues to Normal dispatch; anything else is typed into the box.
//! 5. With a text-editing element focused, only Escape is intercepted: it
//!    blurs the element, hides the query box, and leaves Insert mode.
//! 6. In Insert mode, only Escape is intercepted.
//! 7. Normal dispatch: the key enters the sequence buffer and the command
//!    table. Unbound keys pass through.
//!
//! Commands never fail. Tab bridge errors are logged and dropped.

use pagenav_core::event::{KeyCode, KeyEvent, Modifiers};
use pagenav_core::key_sequence::{KeySequenceBuffer, KeySequenceKind};
use pagenav_hints::{Activation, HintEngine};
use pagenav_scroll::{PageJump, ScrollAnimator};
use pagenav_tabs::{TabBridge, TabError, TabTransport};
use tracing::{debug, trace, warn};

use crate::command::Command;
use crate::config::NavConfig;
use crate::host::NavHost;
use crate::mode::Mode;
use crate::search::SearchAdapter;

/// What the host should do with a key event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Navigation handled the key; suppress the page's default handling.
    Consumed,
    /// Let the page handle the key normally.
    PassThrough,
}

/// Top-level keyboard state machine.
pub struct ModeController<T> {
    mode: Mode,
    passthrough: Modifiers,
    hints: HintEngine,
    scroll: ScrollAnimator,
    sequence: KeySequenceBuffer,
    search: SearchAdapter,
    tabs: TabBridge<T>,
}

impl<T> std::fmt::Debug for ModeController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModeController")
            .field("mode", &self.mode)
            .field("hints", &self.hints)
            .field("scroll", &self.scroll)
            .field("sequence", &self.sequence)
            .field("search", &self.search)
            .finish()
    }
}

impl<T: TabTransport> ModeController<T> {
    /// Create a controller sending tab requests through `transport`.
    pub fn new(config: NavConfig, transport: T) -> Self {
        Self {
            mode: Mode::Normal,
            passthrough: config.passthrough_modifiers,
            hints: HintEngine::new(config.hints),
            scroll: ScrollAnimator::new(config.scroll),
            sequence: KeySequenceBuffer::new(),
            search: SearchAdapter::new(),
            tabs: TabBridge::new(transport),
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The hint engine.
    #[must_use]
    pub fn hints(&self) -> &HintEngine {
        &self.hints
    }

    /// The scroll animator.
    #[must_use]
    pub fn scroll(&self) -> &ScrollAnimator {
        &self.scroll
    }

    /// The search adapter.
    #[must_use]
    pub fn search(&self) -> &SearchAdapter {
        &self.search
    }

    /// Run one animation frame. Returns whether another frame is needed.
    pub fn on_frame<H: NavHost>(&mut self, host: &mut H) -> bool {
        let now = host.now();
        self.scroll.frame(host, now) > 0
    }

    /// Dispatch one key event.
    pub fn handle_key<H: NavHost>(&mut self, host: &mut H, event: &KeyEvent) -> KeyDisposition {
        if event.is_release() {
            self.scroll.key_released(event.code);
            return KeyDisposition::PassThrough;
        }

        if event.modifiers.intersects(self.passthrough) {
            trace!(key = ?event.code, "modifier passthrough");
            return KeyDisposition::PassThrough;
        }

        if self.hints.is_active() {
            let outcome = self.hints.handle_key(host, event);
            if outcome.ended_session() {
                self.set_mode(host, Mode::Normal);
            }
            return KeyDisposition::Consumed;
        }

        if self.mode == Mode::FindBoxFocused {
            match event.code {
                KeyCode::Enter => {
                    self.set_mode(host, Mode::Normal);
                    self.search.submit(host);
                    return KeyDisposition::Consumed;
                }
                KeyCode::Escape => {
                    // The box is usually a focused text field itself.
                    self.search.hide_box(host);
                    self.set_mode(host, Mode::Normal);
                    return self.dispatch_normal(host, event);
                }
                _ => return KeyDisposition::PassThrough,
            }
        }

        if host.focused_kind().is_some_and(|k| k.is_text_editing()) {
            if !event.is_escape() {
                return KeyDisposition::PassThrough;
            }
            host.blur_focused();
            if host.query_box_visible() {
                self.search.hide_box(host);
            }
            self.set_mode(host, Mode::Normal);
            return KeyDisposition::Consumed;
        }

        if self.mode == Mode::Insert {
            if event.is_escape() {
                self.set_mode(host, Mode::Normal);
                return KeyDisposition::Consumed;
            }
            return KeyDisposition::PassThrough;
        }

        if event.is_escape() && host.query_box_visible() {
            self.search.hide_box(host);
            self.set_mode(host, Mode::Normal);
        }

        self.dispatch_normal(host, event)
    }

    fn dispatch_normal<H: NavHost>(&mut self, host: &mut H, event: &KeyEvent) -> KeyDisposition {
        let sequence = self.sequence.push(event);

        if event.is_escape() {
            self.scroll.stop();
            return KeyDisposition::PassThrough;
        }

        let Some(command) = Command::lookup(event) else {
            trace!(key = ?event.code, "unbound key passthrough");
            return KeyDisposition::PassThrough;
        };
        trace!(?command, "command");

        match command {
            Command::NextTab => self.send_tab(TabBridge::move_next),
            Command::PrevTab => self.send_tab(TabBridge::move_prev),
            Command::CloseTab => self.send_tab(TabBridge::close_active),
            Command::HistoryBack => host.history_back(),
            Command::HistoryForward => host.history_forward(),
            Command::Hints { new_tab } => {
                if let Activation::Started { .. } = self.hints.activate(host, new_tab) {
                    self.set_mode(host, Mode::HintActive);
                }
            }
            Command::Scroll(direction) => {
                let now = host.now();
                self.scroll.scroll(host, direction, event.code, now);
            }
            Command::Jump(jump) => self.scroll.jump(host, jump),
            Command::SequenceG => {
                if sequence == Some(KeySequenceKind::JumpToTop) {
                    self.scroll.jump(host, PageJump::Start);
                }
            }
            Command::FocusSearch => {
                self.search.focus_box(host);
                self.set_mode(host, Mode::FindBoxFocused);
            }
            Command::SearchNext => {
                self.search.next(host);
            }
            Command::SearchPrev => {
                self.search.prev(host);
            }
            Command::EnterInsert => self.set_mode(host, Mode::Insert),
        }
        KeyDisposition::Consumed
    }

    fn send_tab(&self, send: fn(&TabBridge<T>) -> Result<(), TabError>) {
        if let Err(err) = send(&self.tabs) {
            warn!(error = %err, "tab command dropped");
        }
    }

    fn set_mode<H: NavHost>(&mut self, host: &mut H, mode: Mode) {
        if self.mode == mode {
            return;
        }
        debug!(from = %self.mode, to = %mode, "mode transition");
        self.mode = mode;
        host.mode_changed(mode);
    }
}
