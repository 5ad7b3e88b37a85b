#![forbid(unsafe_code)]

//! Held-key scroll animation.
//!
//! A scroll session starts on key press and runs one frame loop that moves
//! its surface at a constant velocity. The animator keeps a single live
//! register (direction plus session epoch); every loop compares its own
//! epoch against the register before each step and stops on mismatch. That
//! comparison is the only cancellation path: releasing the trigger key
//! clears the register, and starting a different direction overwrites it.
//!
//! # Invariants
//! 1. At most one loop matches the live register, so at most one loop moves
//!    anything on a given frame.
//! 2. Pressing the live direction again is a no-op.
//! 3. A superseded loop never steps again; it is dropped when its successor
//!    starts.
//! 4. Only the live session's trigger key can clear the register.
//!
//! # Failure Modes
//! - A release that never arrives (focus loss) leaves the session live until
//!   another direction supersedes it or [`ScrollAnimator::stop`] is called.
//! - An unscrollable surface is still "scrolled"; the host clamps and the
//!   offset does not change.

use std::time::Duration;

use pagenav_core::event::KeyCode;
use tracing::{debug, trace};

use crate::direction::{Axis, Direction};
use crate::surface::{ScrollHost, ScrollSurface, select_surface};

/// Default scroll velocity in pixels per millisecond.
pub const DEFAULT_VELOCITY: f64 = 0.8;

/// Default fraction of the viewport height moved by a half-page jump.
pub const DEFAULT_HALF_PAGE_FACTOR: f64 = 0.5;

/// Tunables for scrolling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Held-key velocity in pixels per millisecond.
    pub velocity_px_per_ms: f64,
    /// Fraction of the viewport height moved by `d`/`u`.
    pub half_page_factor: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            velocity_px_per_ms: DEFAULT_VELOCITY,
            half_page_factor: DEFAULT_HALF_PAGE_FACTOR,
        }
    }
}

impl ScrollConfig {
    /// Set the held-key velocity.
    #[must_use]
    pub fn with_velocity(mut self, px_per_ms: f64) -> Self {
        self.velocity_px_per_ms = px_per_ms;
        self
    }

    /// Set the half-page jump fraction.
    #[must_use]
    pub fn with_half_page_factor(mut self, factor: f64) -> Self {
        self.half_page_factor = factor;
        self
    }
}

/// Result of [`ScrollAnimator::scroll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStart {
    /// A new session began on this surface.
    Started {
        /// Surface the session moves.
        surface: ScrollSurface,
    },
    /// The direction was already live; nothing changed.
    Ignored,
}

/// One-shot smooth page jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageJump {
    /// Down by a fraction of the viewport height.
    HalfPageDown,
    /// Up by a fraction of the viewport height.
    HalfPageUp,
    /// To the bottom of the document.
    End,
    /// To the top of the document.
    Start,
}

impl PageJump {
    /// Ask the host to smoothly perform this jump on the page.
    pub fn apply<H: ScrollHost + ?Sized>(self, host: &mut H, config: &ScrollConfig) {
        let viewport = host.viewport();
        match self {
            Self::HalfPageDown => {
                host.smooth_scroll_page_by(0.0, viewport.height * config.half_page_factor);
            }
            Self::HalfPageUp => {
                host.smooth_scroll_page_by(0.0, -viewport.height * config.half_page_factor);
            }
            Self::End => host.smooth_scroll_page_to(viewport.scroll_x, viewport.document_height),
            Self::Start => host.smooth_scroll_page_to(viewport.scroll_x, 0.0),
        }
        debug!(jump = ?self, "page jump");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LiveScroll {
    direction: Direction,
    epoch: u64,
    /// Key whose release ends the session. Dropped with the register.
    trigger: KeyCode,
}

#[derive(Debug, Clone, Copy)]
struct ScrollLoop {
    epoch: u64,
    surface: ScrollSurface,
    axis: Axis,
    sign: f64,
    start_position: f64,
    started_at: Duration,
}

impl ScrollLoop {
    fn step<H: ScrollHost + ?Sized>(&self, host: &mut H, velocity: f64, now: Duration) {
        let elapsed_ms = now.saturating_sub(self.started_at).as_nanos() as f64 / 1_000_000.0;
        let position = self.start_position + self.sign * velocity * elapsed_ms;
        host.set_scroll_position(self.surface, self.axis, position);
    }
}

/// Owns the live scroll direction and its frame loops.
#[derive(Debug, Default)]
pub struct ScrollAnimator {
    config: ScrollConfig,
    live: Option<LiveScroll>,
    loops: Vec<ScrollLoop>,
    next_epoch: u64,
}

impl ScrollAnimator {
    /// Create an animator.
    #[must_use]
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Direction currently held, if any.
    #[must_use]
    pub fn live_direction(&self) -> Option<Direction> {
        self.live.map(|l| l.direction)
    }

    /// Loops that would still move their surface on the next frame.
    #[must_use]
    pub fn live_loops(&self) -> usize {
        let Some(live) = self.live else {
            return 0;
        };
        self.loops.iter().filter(|l| l.epoch == live.epoch).count()
    }

    /// Loops scheduled for the next frame, including a released one that
    /// will stop when it observes the register.
    #[must_use]
    pub fn scheduled_loops(&self) -> usize {
        self.loops.len()
    }

    /// Whether [`frame`](Self::frame) has work to do.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        !self.loops.is_empty()
    }

    /// Start scrolling in `direction` until `trigger` is released.
    ///
    /// The first step runs on the next [`frame`](Self::frame).
    pub fn scroll<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        direction: Direction,
        trigger: KeyCode,
        now: Duration,
    ) -> ScrollStart {
        if let Some(live) = self.live {
            if live.direction == direction {
                trace!(%direction, "scroll direction already live");
                return ScrollStart::Ignored;
            }
            debug!(from = %live.direction, to = %direction, "scroll superseded");
        }

        let surface = select_surface(&*host);
        let axis = direction.axis();
        let start_position = host.scroll_position(surface, axis);

        self.next_epoch += 1;
        let epoch = self.next_epoch;
        self.live = Some(LiveScroll {
            direction,
            epoch,
            trigger,
        });
        // Older loops can never match the register again, even if frames
        // are paused while directions keep changing.
        self.loops.clear();
        self.loops.push(ScrollLoop {
            epoch,
            surface,
            axis,
            sign: direction.sign(),
            start_position,
            started_at: now,
        });
        debug!(%direction, ?surface, start_position, "scroll started");
        ScrollStart::Started { surface }
    }

    /// Route a key release. Clears the register if `code` is the live
    /// session's trigger; returns whether it did.
    pub fn key_released(&mut self, code: KeyCode) -> bool {
        match self.live {
            Some(live) if live.trigger == code => {
                self.live = None;
                debug!(direction = %live.direction, "scroll released");
                true
            }
            _ => false,
        }
    }

    /// Clear the register regardless of which key is held.
    pub fn stop(&mut self) {
        if let Some(live) = self.live.take() {
            debug!(direction = %live.direction, "scroll stopped");
        }
    }

    /// Run one animation frame at time `now`.
    ///
    /// Each scheduled loop first checks the register; a loop whose session is
    /// no longer live is dropped without moving anything. Returns the number
    /// of loops still scheduled.
    pub fn frame<H: ScrollHost + ?Sized>(&mut self, host: &mut H, now: Duration) -> usize {
        let live_epoch = self.live.map(|l| l.epoch);
        let velocity = self.config.velocity_px_per_ms;
        self.loops.retain(|lp| {
            if Some(lp.epoch) != live_epoch {
                trace!(epoch = lp.epoch, "scroll loop stopped");
                return false;
            }
            lp.step(&mut *host, velocity, now);
            trace!(epoch = lp.epoch, ?now, "scroll frame");
            true
        });
        self.loops.len()
    }

    /// Perform a one-shot smooth jump with this animator's configuration.
    pub fn jump<H: ScrollHost + ?Sized>(&self, host: &mut H, jump: PageJump) {
        jump.apply(host, &self.config);
    }
}
