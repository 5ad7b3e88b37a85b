#![forbid(unsafe_code)]

//! Controller configuration.
//!
//! # Environment Variables
//!
//! | Variable                  | Meaning                                         |
//! |---------------------------|-------------------------------------------------|
//! | `PAGENAV_SCROLL_VELOCITY` | Held-key velocity in px/ms (positive float)     |
//! | `PAGENAV_HINT_ALPHABET`   | Hint code letters (lowercase, distinct, no `f`) |
//! | `PAGENAV_PASSTHROUGH`     | Comma list of `ctrl`, `alt`, `super`, `shift`   |
//!
//! Invalid values are logged and the default is kept.

use std::env;

use pagenav_core::event::Modifiers;
use pagenav_hints::{HintAlphabet, HintConfig};
use pagenav_scroll::ScrollConfig;
use tracing::warn;

/// Environment variable for the scroll velocity.
pub const ENV_SCROLL_VELOCITY: &str = "PAGENAV_SCROLL_VELOCITY";
/// Environment variable for the hint alphabet.
pub const ENV_HINT_ALPHABET: &str = "PAGENAV_HINT_ALPHABET";
/// Environment variable for the passthrough modifier list.
pub const ENV_PASSTHROUGH: &str = "PAGENAV_PASSTHROUGH";

/// Configuration for a [`ModeController`](crate::ModeController).
#[derive(Debug, Clone)]
pub struct NavConfig {
    /// Hint session settings.
    pub hints: HintConfig,
    /// Scroll settings.
    pub scroll: ScrollConfig,
    /// Keys held with any of these modifiers always pass through.
    pub passthrough_modifiers: Modifiers,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            hints: HintConfig::default(),
            scroll: ScrollConfig::default(),
            passthrough_modifiers: Modifiers::CTRL,
        }
    }
}

impl NavConfig {
    /// Set the hint configuration.
    #[must_use]
    pub fn with_hints(mut self, hints: HintConfig) -> Self {
        self.hints = hints;
        self
    }

    /// Set the scroll configuration.
    #[must_use]
    pub fn with_scroll(mut self, scroll: ScrollConfig) -> Self {
        self.scroll = scroll;
        self
    }

    /// Set the passthrough modifiers.
    #[must_use]
    pub fn with_passthrough(mut self, modifiers: Modifiers) -> Self {
        self.passthrough_modifiers = modifiers;
        self
    }

    /// Defaults overridden by the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by `lookup`, which maps a variable name to its
    /// value.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SCROLL_VELOCITY) {
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => {
                    config.scroll = config.scroll.with_velocity(v);
                }
                _ => warn!(var = ENV_SCROLL_VELOCITY, value = %raw, "ignoring invalid setting"),
            }
        }

        if let Some(raw) = lookup(ENV_HINT_ALPHABET) {
            match HintAlphabet::new(raw.trim()) {
                Ok(alphabet) => config.hints.alphabet = alphabet,
                Err(err) => warn!(
                    var = ENV_HINT_ALPHABET,
                    value = %raw,
                    error = %err,
                    "ignoring invalid setting"
                ),
            }
        }

        if let Some(raw) = lookup(ENV_PASSTHROUGH) {
            match parse_modifiers(&raw) {
                Some(modifiers) => config.passthrough_modifiers = modifiers,
                None => warn!(var = ENV_PASSTHROUGH, value = %raw, "ignoring invalid setting"),
            }
        }

        config
    }
}

/// Parse a comma-separated modifier list. An empty list means none.
fn parse_modifiers(raw: &str) -> Option<Modifiers> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .try_fold(Modifiers::NONE, |acc, name| {
            Modifiers::parse_name(name).map(|m| acc | m)
        })
}
