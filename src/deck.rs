//! The deck and its shuffle and draw operations.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::vec::Vec;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards.
///
/// The front of the deck is the next card to be drawn. A new deck holds all
/// 52 cards, suits in declaration order and ranks Ace through King within
/// each suit. Drawing never refills the deck; call [`Deck::reset`] or build a
/// new one to start over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in draw order.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Self::ordered_cards(),
        }
    }

    fn ordered_cards() -> VecDeque<Card> {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }

        cards
    }

    /// Builds a deck holding `cards` in the given order. The first card
    /// yielded is drawn first.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::TooManyCards`] if more than [`DECK_SIZE`] cards are
    /// given, or [`DeckError::DuplicateCard`] if a card appears twice.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck, DeckError, Rank, Suit};
    ///
    /// let ace = Card::new(Suit::Spades, Rank::Ace);
    /// let mut deck = Deck::stacked([ace])?;
    /// assert_eq!(deck.draw_card(), Ok(ace));
    /// assert_eq!(Deck::stacked([ace, ace]), Err(DeckError::DuplicateCard(ace)));
    /// # Ok::<(), DeckError>(())
    /// ```
    pub fn stacked<I: IntoIterator<Item = Card>>(cards: I) -> Result<Self, DeckError> {
        let mut seen = [false; DECK_SIZE];
        let mut stack = VecDeque::with_capacity(DECK_SIZE);

        for card in cards {
            if stack.len() == DECK_SIZE {
                return Err(DeckError::TooManyCards);
            }
            let slot = &mut seen[Self::index_of(card)];
            if *slot {
                return Err(DeckError::DuplicateCard(card));
            }
            *slot = true;
            stack.push_back(card);
        }

        Ok(Self { cards: stack })
    }

    /// Position of `card` in a new, unshuffled deck.
    const fn index_of(card: Card) -> usize {
        card.suit() as usize * Rank::ALL.len() + card.rank().value() as usize - 1
    }

    /// Restores the deck to a full, unshuffled state.
    pub fn reset(&mut self) {
        debug!("resetting deck ({} cards remaining)", self.cards.len());
        self.cards = Self::ordered_cards();
    }

    /// Shuffles the remaining cards in place using `rng`.
    ///
    /// Every permutation is equally likely (Fisher-Yates). The contents and
    /// the count of the deck are unchanged.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        debug!("shuffling {} cards", self.cards.len());
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Shuffles the remaining cards with a generator seeded from `seed`.
    ///
    /// The same seed always produces the same order for the same deck.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let mut a = Deck::new();
    /// let mut b = Deck::new();
    /// a.shuffle_with_seed(7);
    /// b.shuffle_with_seed(7);
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if there are no cards left.
    pub fn draw_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or_else(|| {
            warn!("attempted to draw from an empty deck");
            DeckError::EmptyDeck
        })
    }

    /// Draws `count` cards one at a time, returning them in draw order.
    ///
    /// Drawing zero cards leaves the deck untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the deck runs out part way. The
    /// cards drawn before that point are discarded, not returned to the deck.
    /// Use [`Deck::draw_cards_exact`] to check the count first.
    pub fn draw_cards(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > 0 {
            debug!("drawing {count} cards from {}", self.cards.len());
        }

        let mut drawn = Vec::with_capacity(count.min(self.cards.len()));
        for _ in 0..count {
            drawn.push(self.draw_card()?);
        }
        Ok(drawn)
    }

    /// Draws exactly `count` cards or none at all.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if fewer than `count` cards
    /// remain. The deck is not modified in that case.
    pub fn draw_cards_exact(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if count > remaining {
            warn!("requested {count} cards with only {remaining} remaining");
            return Err(DeckError::NotEnoughCards {
                requested: count,
                remaining,
            });
        }

        debug!("drawing {count} cards from {remaining}");
        Ok(self.cards.drain(..count).collect())
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, front (next to draw) first.
    pub fn cards(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
