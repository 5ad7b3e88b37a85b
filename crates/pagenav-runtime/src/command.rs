#![forbid(unsafe_code)]

//! The Normal-mode command table.

use pagenav_core::event::KeyEvent;
use pagenav_scroll::{Direction, PageJump};

/// A Normal-mode command bound to a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `J`: activate the next tab.
    NextTab,
    /// `K`: activate the previous tab.
    PrevTab,
    /// `x`: close the active tab.
    CloseTab,
    /// `H`: history back.
    HistoryBack,
    /// `L`: history forward.
    HistoryForward,
    /// `f`/`F`: open a hint session; `F` opens targets in a new context.
    Hints {
        /// Open the resolved target in a new context.
        new_tab: bool,
    },
    /// `h`/`j`/`k`/`l`: scroll while held.
    Scroll(Direction),
    /// `d`/`u`/`G`: smooth one-shot jump.
    Jump(PageJump),
    /// `g`: jump to the top when it completes `gg`.
    SequenceG,
    /// `/`: show and focus the query box.
    FocusSearch,
    /// `n`: next match.
    SearchNext,
    /// `N`: previous match.
    SearchPrev,
    /// `i`: enter Insert mode.
    EnterInsert,
}

impl Command {
    /// Look up the command bound to `event`.
    #[must_use]
    pub fn lookup(event: &KeyEvent) -> Option<Self> {
        let command = match event.as_char()? {
            'J' => Self::NextTab,
            'K' => Self::PrevTab,
            'x' => Self::CloseTab,
            'H' => Self::HistoryBack,
            'L' => Self::HistoryForward,
            'f' | 'F' => Self::Hints {
                new_tab: event.shift(),
            },
            'h' => Self::Scroll(Direction::Left),
            'j' => Self::Scroll(Direction::Down),
            'k' => Self::Scroll(Direction::Up),
            'l' => Self::Scroll(Direction::Right),
            'd' => Self::Jump(PageJump::HalfPageDown),
            'u' => Self::Jump(PageJump::HalfPageUp),
            'G' => Self::Jump(PageJump::End),
            'g' => Self::SequenceG,
            '/' => Self::FocusSearch,
            'n' => Self::SearchNext,
            'N' => Self::SearchPrev,
            'i' => Self::EnterInsert,
            _ => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagenav_core::event::{KeyCode, Modifiers};

    #[test]
    fn shifted_f_opens_in_new_tab() {
        assert_eq!(
            Command::lookup(&KeyEvent::char('F')),
            Some(Command::Hints { new_tab: true })
        );
        assert_eq!(
            Command::lookup(&KeyEvent::char('f')),
            Some(Command::Hints { new_tab: false })
        );
    }

    #[test]
    fn case_distinguishes_tabs_from_scrolling() {
        assert_eq!(Command::lookup(&KeyEvent::char('J')), Some(Command::NextTab));
        assert_eq!(
            Command::lookup(&KeyEvent::char('j')),
            Some(Command::Scroll(Direction::Down))
        );
        assert_eq!(Command::lookup(&KeyEvent::char('H')), Some(Command::HistoryBack));
        assert_eq!(
            Command::lookup(&KeyEvent::char('h')),
            Some(Command::Scroll(Direction::Left))
        );
    }

    #[test]
    fn unbound_keys() {
        assert_eq!(Command::lookup(&KeyEvent::char('q')), None);
        assert_eq!(Command::lookup(&KeyEvent::new(KeyCode::Enter)), None);
        assert_eq!(Command::lookup(&KeyEvent::new(KeyCode::Escape)), None);
        let shifted_slash = KeyEvent::char('?').with_modifiers(Modifiers::SHIFT);
        assert_eq!(Command::lookup(&shifted_slash), None);
    }
}
