//! Error types for deck operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur during deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// Fewer cards remain than were requested.
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
    /// A stacked deck was given more cards than a full deck holds.
    #[error("a deck holds at most 52 cards")]
    TooManyCards,
    /// A stacked deck was given the same card twice.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}
