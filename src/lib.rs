//! A playing card deck with seeded shuffling and draw operations, with
//! optional `no_std` support.
//!
//! The crate provides a [`Deck`] of [`Card`]s that can be shuffled with any
//! [`rand::Rng`] and drawn from the front, plus a [`Session`] that plays the
//! shuffle-then-draw round used by the `shuffler` binary.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, DeckError};
//!
//! let mut deck = Deck::new();
//! deck.shuffle_with_seed(42);
//! let hand = deck.draw_cards(5)?;
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.len(), 47);
//! # Ok::<(), DeckError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::DeckError;
pub use options::{DrawPolicy, SessionOptions};
pub use result::RoundReport;
pub use session::{Selection, Session};
