//! Menu-driven deck session.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::DeckError;
use crate::options::{DrawPolicy, SessionOptions};
use crate::result::RoundReport;

pub mod selection;

pub use selection::Selection;

/// A deck owned together with the random source used to shuffle it.
///
/// A session plays rounds the way the interactive menu does: apply a
/// [`Selection`], draw one card, then draw a hand.
#[derive(Debug, Clone)]
pub struct Session {
    /// The deck in play.
    deck: Deck,
    /// Session options.
    options: SessionOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a session with a full deck and a generator seeded from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Selection, Session, SessionOptions};
    ///
    /// let mut session = Session::new(SessionOptions::default(), 42);
    /// let report = session.play_round(Selection::Shuffle).unwrap();
    /// assert_eq!(report.hand.len(), 5);
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the deck in play.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the deck in play for direct manipulation.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Applies a menu selection to the deck.
    pub fn apply(&mut self, selection: Selection) {
        debug!("applying selection {selection}");
        match selection {
            Selection::Shuffle => self.deck.shuffle(&mut self.rng),
            Selection::Reset => self.deck = Deck::new(),
        }
    }

    /// Applies `selection`, then draws one card followed by a hand of
    /// [`SessionOptions::hand_size`] cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while drawing. The kind of error
    /// for the hand depends on [`SessionOptions::draw_policy`].
    pub fn play_round(&mut self, selection: Selection) -> Result<RoundReport, DeckError> {
        self.apply(selection);
        let cards_before_draw = self.deck.len();

        let first_card = self.deck.draw_card()?;
        let hand_size = self.options.hand_size;
        let hand = match self.options.draw_policy {
            DrawPolicy::Destructive => self.deck.draw_cards(hand_size)?,
            DrawPolicy::AllOrNothing => self.deck.draw_cards_exact(hand_size)?,
        };

        Ok(RoundReport {
            selection,
            cards_before_draw,
            first_card,
            hand,
            cards_remaining: self.deck.len(),
        })
    }
}
