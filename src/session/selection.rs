//! Menu selection types.

use core::fmt;

/// A menu selection for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Shuffle the deck into a random order (menu option `1`).
    Shuffle,
    /// Replace the deck with a fresh, unshuffled one (menu option `2`).
    Reset,
}

impl Selection {
    /// All selections in menu order.
    pub const ALL: [Self; 2] = [Self::Shuffle, Self::Reset];

    /// Parses a line of menu input.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for anything that is
    /// not one of the menu numbers.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Selection;
    ///
    /// assert_eq!(Selection::parse(" 1\n"), Some(Selection::Shuffle));
    /// assert_eq!(Selection::parse("3"), None);
    /// assert_eq!(Selection::parse("q"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(Self::Shuffle),
            2 => Some(Self::Reset),
            _ => None,
        }
    }

    /// Returns the menu number for this selection.
    #[must_use]
    pub const fn key(self) -> u8 {
        match self {
            Self::Shuffle => 1,
            Self::Reset => 2,
        }
    }

    /// Returns the menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shuffle => "Fisher-Yates Shuffle",
            Self::Reset => "Reset to Unshuffled Deck",
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.key(), self.label())
    }
}
