#![forbid(unsafe_code)]

//! Hint code allocation.
//!
//! Codes are fixed-length, two letters drawn from a [`HintAlphabet`]. The
//! default alphabet is the lowercase Latin alphabet minus `f`, the key that
//! opens a hint session, so 25 × 25 = 625 codes are available.
//!
//! # Invariants
//! 1. Codes are pairwise distinct.
//! 2. Order is deterministic: first letter major, second letter minor, both
//!    in alphabet order (`aa, ab, ac, ... ba, bb, ...`).
//! 3. No code contains the reserved letter.

use std::fmt;

/// Length of every hint code.
pub const CODE_LEN: usize = 2;

/// Letters used for hint codes by default.
pub const DEFAULT_ALPHABET: &str = "abcdeghijklmnopqrstuvwxyz";

/// Letter excluded from codes by default (it opens a hint session).
pub const DEFAULT_RESERVED: char = 'f';

// ---------------------------------------------------------------------------
// HintAlphabet
// ---------------------------------------------------------------------------

/// Why an alphabet string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// No letters at all.
    Empty,
    /// A character that is not a lowercase ASCII letter.
    NotLowercase(char),
    /// The same letter appears twice.
    Duplicate(char),
    /// The alphabet contains the reserved activation letter.
    ContainsReserved(char),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "hint alphabet is empty"),
            Self::NotLowercase(c) => write!(f, "hint alphabet letter {c:?} is not lowercase ASCII"),
            Self::Duplicate(c) => write!(f, "hint alphabet repeats {c:?}"),
            Self::ContainsReserved(c) => write!(f, "hint alphabet contains reserved letter {c:?}"),
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Ordered set of distinct lowercase letters used to build codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintAlphabet {
    letters: Vec<char>,
    reserved: char,
}

impl HintAlphabet {
    /// Validate `letters` against the default reserved letter.
    pub fn new(letters: &str) -> Result<Self, AlphabetError> {
        Self::with_reserved(letters, DEFAULT_RESERVED)
    }

    /// Validate `letters`, rejecting any use of `reserved`.
    pub fn with_reserved(letters: &str, reserved: char) -> Result<Self, AlphabetError> {
        let mut out: Vec<char> = Vec::with_capacity(letters.len());
        for c in letters.chars() {
            if !c.is_ascii_lowercase() {
                return Err(AlphabetError::NotLowercase(c));
            }
            if c == reserved {
                return Err(AlphabetError::ContainsReserved(c));
            }
            if out.contains(&c) {
                return Err(AlphabetError::Duplicate(c));
            }
            out.push(c);
        }
        if out.is_empty() {
            return Err(AlphabetError::Empty);
        }
        Ok(Self {
            letters: out,
            reserved,
        })
    }

    /// Letters in code order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The letter codes never contain.
    #[must_use]
    pub const fn reserved(&self) -> char {
        self.reserved
    }

    /// Whether `c` is a code letter.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }
}

impl Default for HintAlphabet {
    fn default() -> Self {
        Self {
            letters: DEFAULT_ALPHABET.chars().collect(),
            reserved: DEFAULT_RESERVED,
        }
    }
}

// ---------------------------------------------------------------------------
// LabelAllocator
// ---------------------------------------------------------------------------

/// Produces the deterministic code sequence for an alphabet.
#[derive(Debug, Clone, Default)]
pub struct LabelAllocator {
    alphabet: HintAlphabet,
}

impl LabelAllocator {
    /// Create an allocator over `alphabet`.
    #[must_use]
    pub fn new(alphabet: HintAlphabet) -> Self {
        Self { alphabet }
    }

    /// The alphabet codes are drawn from.
    #[must_use]
    pub fn alphabet(&self) -> &HintAlphabet {
        &self.alphabet
    }

    /// Number of distinct codes available.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.alphabet.letters.len().pow(CODE_LEN as u32)
    }

    /// Every code, in allocation order.
    pub fn codes(&self) -> impl Iterator<Item = String> + '_ {
        let letters = &self.alphabet.letters;
        letters
            .iter()
            .flat_map(move |&first| letters.iter().map(move |&second| code(first, second)))
    }

    /// The first `min(count, capacity)` codes.
    #[must_use]
    pub fn allocate(&self, count: usize) -> Vec<String> {
        self.codes().take(count).collect()
    }
}

fn code(first: char, second: char) -> String {
    let mut s = String::with_capacity(CODE_LEN);
    s.push(first);
    s.push(second);
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn default_alphabet_excludes_f() {
        let alphabet = HintAlphabet::default();
        assert_eq!(alphabet.letters().len(), 25);
        assert!(!alphabet.contains('f'));
        assert_eq!(alphabet.reserved(), 'f');
    }

    #[test]
    fn default_capacity_is_625() {
        let alloc = LabelAllocator::default();
        assert_eq!(alloc.capacity(), 625);
        assert_eq!(alloc.codes().count(), 625);
    }

    #[test]
    fn codes_are_first_letter_major() {
        let alloc = LabelAllocator::default();
        assert_eq!(alloc.allocate(7), vec!["aa", "ab", "ac", "ad", "ae", "ag", "ah"]);
        let codes: Vec<String> = alloc.codes().collect();
        assert_eq!(codes[25], "ba");
        assert_eq!(codes[624], "zz");
    }

    #[test]
    fn codes_are_distinct_and_never_reserved() {
        let alloc = LabelAllocator::default();
        let codes: HashSet<String> = alloc.codes().collect();
        assert_eq!(codes.len(), 625);
        assert!(codes.iter().all(|c| c.len() == CODE_LEN && !c.contains('f')));
    }

    #[test]
    fn allocate_truncates_to_capacity() {
        let alloc = LabelAllocator::new(HintAlphabet::new("ab").unwrap());
        assert_eq!(alloc.allocate(10), vec!["aa", "ab", "ba", "bb"]);
        assert!(alloc.allocate(0).is_empty());
    }

    #[test]
    fn alphabet_validation() {
        assert_eq!(HintAlphabet::new(""), Err(AlphabetError::Empty));
        assert_eq!(HintAlphabet::new("aB"), Err(AlphabetError::NotLowercase('B')));
        assert_eq!(HintAlphabet::new("aba"), Err(AlphabetError::Duplicate('a')));
        assert_eq!(
            HintAlphabet::new("asdf"),
            Err(AlphabetError::ContainsReserved('f'))
        );
        assert!(HintAlphabet::with_reserved("asdf", 'x').is_ok());
    }

    #[test]
    fn alphabet_error_display() {
        assert_eq!(
            AlphabetError::ContainsReserved('f').to_string(),
            "hint alphabet contains reserved letter 'f'"
        );
    }
}
