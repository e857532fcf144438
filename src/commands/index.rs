//! One-based display index.

use std::fmt;
use std::num::NonZeroUsize;

/// A position in a displayed list, as typed by the user (starting at 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(NonZeroUsize);

impl Index {
    pub fn from_one_based(index: usize) -> Option<Self> {
        NonZeroUsize::new(index).map(Self)
    }

    /// Parse a non-zero unsigned integer; signs and other characters are rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        text.parse::<NonZeroUsize>().ok().map(Self)
    }

    pub fn one_based(self) -> usize {
        self.0.get()
    }

    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
