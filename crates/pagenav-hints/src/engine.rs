#![forbid(unsafe_code)]

//! Hint session state machine.
//!
//! [`HintEngine::activate`] labels every visible actionable element with a
//! two-letter code and renders a marker for each. While the session is open
//! the engine consumes every key: letters narrow the candidate set, an exact
//! match resolves the target, and anything that cannot extend a code ends the
//! session.
//!
//! # Invariants
//! 1. At most one session exists; activating while active is a no-op.
//! 2. Codes within a session are pairwise distinct and assigned in provider
//!    order.
//! 3. Ending a session (resolve, abort, or cancel) removes every marker,
//!    releases key interception, then drops the session state, in that order.
//! 4. Elements captured by a session are never reused by the next one.
//!
//! # Failure Modes
//! - No visible elements: no session starts ([`Activation::NoCandidates`]).
//! - Input that matches no code: the session aborts silently.

use pagenav_core::element::{ActionableElement, ElementId, ElementKind};
use pagenav_core::event::{KeyCode, KeyEvent};
use pagenav_core::geometry::Point;
use tracing::{debug, trace};

use crate::label::{HintAlphabet, LabelAllocator};
use crate::provider::{ContentTree, ElementProvider, VisibleElementProvider};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for hint sessions.
#[derive(Debug, Clone)]
pub struct HintConfig {
    /// Letters codes are built from.
    pub alphabet: HintAlphabet,

    /// Render marker text in uppercase (default: true).
    ///
    /// Matching is case-insensitive either way.
    pub uppercase_markers: bool,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            alphabet: HintAlphabet::default(),
            uppercase_markers: true,
        }
    }
}

impl HintConfig {
    /// Create a config with a custom alphabet.
    #[must_use]
    pub fn with_alphabet(alphabet: HintAlphabet) -> Self {
        Self {
            alphabet,
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Host seams
// ---------------------------------------------------------------------------

/// Handle to a rendered marker overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(pub u64);

/// Renders and removes marker overlays.
pub trait MarkerLayer {
    /// Draw `text` at document position `at`.
    fn place_marker(&mut self, text: &str, at: Point) -> MarkerHandle;

    /// Remove a previously placed marker.
    fn remove_marker(&mut self, handle: MarkerHandle);
}

/// Options carried by a synthesized click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickOptions {
    /// Open the target in a background/new context.
    pub new_context: bool,
}

/// Terminal actions on a resolved element.
pub trait ElementActions {
    /// Focus a text-entry element and put the caret after its value.
    fn focus_text_entry(&mut self, id: ElementId);

    /// Focus an editable region and collapse the selection at its end.
    fn focus_editable(&mut self, id: ElementId);

    /// Synthesize a click on the element.
    fn click(&mut self, id: ElementId, options: ClickOptions);
}

/// Everything a hint session needs from the host.
pub trait HintHost: ContentTree + MarkerLayer + ElementActions {}

impl<T: ContentTree + MarkerLayer + ElementActions> HintHost for T {}

// ---------------------------------------------------------------------------
// Session types
// ---------------------------------------------------------------------------

/// A labelled element within one session.
#[derive(Debug, Clone, PartialEq)]
pub struct HintLabel {
    /// Lowercase code the user types.
    pub code: String,
    /// The element the code selects.
    pub element: ActionableElement,
    /// Rendered overlay.
    pub marker: MarkerHandle,
}

/// Keys typed so far in the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMatchState {
    accumulated: String,
}

impl KeyMatchState {
    /// Append one typed letter.
    pub fn push(&mut self, c: char) {
        self.accumulated.push(c);
    }

    /// Everything typed so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.accumulated
    }

    /// Discard typed input.
    pub fn clear(&mut self) {
        self.accumulated.clear();
    }
}

#[derive(Debug)]
struct HintSession {
    labels: Vec<HintLabel>,
    input: KeyMatchState,
    new_tab: bool,
}

enum Lookup {
    Exact(ActionableElement),
    Prefix,
    Miss,
}

impl HintSession {
    fn lookup(&self) -> Lookup {
        let typed = self.input.as_str();
        if let Some(label) = self.labels.iter().find(|l| l.code == typed) {
            return Lookup::Exact(label.element);
        }
        if self.labels.iter().any(|l| l.code.starts_with(typed)) {
            Lookup::Prefix
        } else {
            Lookup::Miss
        }
    }
}

/// Result of [`HintEngine::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A session opened with this many labels.
    Started {
        /// Number of labelled elements.
        labels: usize,
    },
    /// A session was already open; nothing changed.
    AlreadyActive,
    /// No visible actionable elements; no session opened.
    NoCandidates,
}

/// Result of feeding one key to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// No session is open; the key was not examined.
    Inactive,
    /// The session is still waiting for input.
    Pending,
    /// A label matched and its element was focused or clicked.
    Resolved {
        /// The resolved element.
        element: ElementId,
    },
    /// The input cannot match any code; the session ended.
    Aborted,
    /// Escape ended the session.
    Cancelled,
}

impl HintOutcome {
    /// Whether this outcome closed the session.
    #[must_use]
    pub const fn ended_session(&self) -> bool {
        matches!(
            self,
            Self::Resolved { .. } | Self::Aborted | Self::Cancelled
        )
    }
}

// ---------------------------------------------------------------------------
// HintEngine
// ---------------------------------------------------------------------------

/// Owns at most one hint session.
pub struct HintEngine<P = VisibleElementProvider> {
    provider: P,
    allocator: LabelAllocator,
    uppercase_markers: bool,
    session: Option<HintSession>,
}

impl<P> std::fmt::Debug for HintEngine<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HintEngine")
            .field("active", &self.session.is_some())
            .field(
                "labels",
                &self.session.as_ref().map_or(0, |s| s.labels.len()),
            )
            .finish()
    }
}

impl Default for HintEngine<VisibleElementProvider> {
    fn default() -> Self {
        Self::new(HintConfig::default())
    }
}

impl HintEngine<VisibleElementProvider> {
    /// Create an engine with the default visibility-filtered provider.
    #[must_use]
    pub fn new(config: HintConfig) -> Self {
        Self::with_provider(config, VisibleElementProvider::default())
    }
}

impl<P: ElementProvider> HintEngine<P> {
    /// Create an engine with a custom element provider.
    #[must_use]
    pub fn with_provider(config: HintConfig, provider: P) -> Self {
        Self {
            provider,
            allocator: LabelAllocator::new(config.alphabet),
            uppercase_markers: config.uppercase_markers,
            session: None,
        }
    }

    /// Whether a session is open.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Labels of the open session (empty when inactive).
    #[must_use]
    pub fn labels(&self) -> &[HintLabel] {
        self.session.as_ref().map_or(&[], |s| s.labels.as_slice())
    }

    /// Keys typed in the open session.
    #[must_use]
    pub fn typed(&self) -> &str {
        self.session.as_ref().map_or("", |s| s.input.as_str())
    }

    /// The code allocator.
    #[must_use]
    pub fn allocator(&self) -> &LabelAllocator {
        &self.allocator
    }

    /// Open a session over the currently visible actionable elements.
    pub fn activate<H: HintHost>(&mut self, host: &mut H, new_tab: bool) -> Activation {
        if self.session.is_some() {
            trace!("hint activation ignored: session already open");
            return Activation::AlreadyActive;
        }

        let elements = self.provider.visible_elements(&*host);
        if elements.is_empty() {
            debug!("hint activation found no candidates");
            return Activation::NoCandidates;
        }

        let viewport = host.viewport();
        let labels: Vec<HintLabel> = elements
            .into_iter()
            .zip(self.allocator.codes())
            .map(|(element, code)| {
                let text = if self.uppercase_markers {
                    code.to_ascii_uppercase()
                } else {
                    code.clone()
                };
                let at = viewport.to_document(element.rect.origin());
                let marker = host.place_marker(&text, at);
                HintLabel {
                    code,
                    element,
                    marker,
                }
            })
            .collect();

        let count = labels.len();
        self.session = Some(HintSession {
            labels,
            input: KeyMatchState::default(),
            new_tab,
        });
        debug!(labels = count, new_tab, "hint session started");
        Activation::Started { labels: count }
    }

    /// Feed one key to the open session.
    pub fn handle_key<H: HintHost>(&mut self, host: &mut H, event: &KeyEvent) -> HintOutcome {
        let Some(session) = self.session.as_mut() else {
            return HintOutcome::Inactive;
        };
        if event.is_release() {
            return HintOutcome::Pending;
        }

        match event.code {
            KeyCode::Escape => {
                self.end_session(host);
                debug!("hint session cancelled");
                return HintOutcome::Cancelled;
            }
            KeyCode::Modifier => return HintOutcome::Pending,
            KeyCode::Char(c) => session.input.push(c.to_ascii_lowercase()),
            _ => {
                self.end_session(host);
                debug!(key = ?event.code, "hint session aborted on non-letter key");
                return HintOutcome::Aborted;
            }
        }

        trace!(typed = session.input.as_str(), "hint input");
        match session.lookup() {
            Lookup::Exact(element) => {
                let new_tab = session.new_tab;
                match element.kind {
                    ElementKind::TextEntry => host.focus_text_entry(element.id),
                    ElementKind::ContentEditable => host.focus_editable(element.id),
                    ElementKind::Clickable => host.click(
                        element.id,
                        ClickOptions {
                            new_context: new_tab,
                        },
                    ),
                }
                self.end_session(host);
                debug!(element = element.id.0, kind = ?element.kind, "hint resolved");
                HintOutcome::Resolved {
                    element: element.id,
                }
            }
            Lookup::Prefix => HintOutcome::Pending,
            Lookup::Miss => {
                self.end_session(host);
                debug!("hint session aborted: no matching code");
                HintOutcome::Aborted
            }
        }
    }

    /// Close the open session without resolving anything.
    ///
    /// Returns `false` if no session was open.
    pub fn cancel<H: MarkerLayer>(&mut self, host: &mut H) -> bool {
        let was_active = self.session.is_some();
        self.end_session(host);
        was_active
    }

    fn end_session<H: MarkerLayer + ?Sized>(&mut self, host: &mut H) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        for label in &session.labels {
            host.remove_marker(label.marker);
        }
        // Markers are gone; clearing the session releases interception.
        self.session = None;
    }
}
