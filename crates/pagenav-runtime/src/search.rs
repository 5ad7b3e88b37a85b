#![forbid(unsafe_code)]

//! Find-in-page façade.
//!
//! Remembers the last submitted query. An empty query means nothing is being
//! searched for, and `next`/`prev` do nothing.

use tracing::debug;

use crate::host::{FindCapability, FindOptions, QueryBox};

/// Wraps the host's find capability and query box.
#[derive(Debug, Clone, Default)]
pub struct SearchAdapter {
    pending: String,
}

impl SearchAdapter {
    /// Create an adapter with no query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last submitted query (empty when none).
    #[must_use]
    pub fn pending_query(&self) -> &str {
        &self.pending
    }

    /// Show the query box and focus it.
    pub fn focus_box<H: QueryBox + ?Sized>(&self, host: &mut H) {
        host.show_query_box();
        host.focus_query_box();
    }

    /// Hide the query box.
    pub fn hide_box<H: QueryBox + ?Sized>(&self, host: &mut H) {
        host.blur_query_box();
        host.hide_query_box();
    }

    /// Capture the box contents as the query, blur the box, and search
    /// forward once. Returns whether a match was found.
    pub fn submit<H: QueryBox + FindCapability + ?Sized>(&mut self, host: &mut H) -> bool {
        self.pending = host.query_text();
        host.blur_query_box();
        debug!(query = %self.pending, "search submitted");
        self.next(host)
    }

    /// Jump to the next match of the pending query.
    pub fn next<H: QueryBox + FindCapability + ?Sized>(&self, host: &mut H) -> bool {
        self.find(host, false)
    }

    /// Jump to the previous match of the pending query.
    pub fn prev<H: QueryBox + FindCapability + ?Sized>(&self, host: &mut H) -> bool {
        self.find(host, true)
    }

    fn find<H: QueryBox + FindCapability + ?Sized>(&self, host: &mut H, backwards: bool) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        host.show_query_box();
        let found = host.find(
            &self.pending,
            FindOptions {
                case_sensitive: false,
                backwards,
                wrap_around: true,
                whole_word: false,
                search_frames: true,
                show_dialog: false,
            },
        );
        // Some hosts rewrite the input while searching.
        host.set_query_text(&self.pending);
        found
    }
}
