//! Round result types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::session::Selection;

/// What happened during a single menu round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// The selection applied before drawing.
    pub selection: Selection,
    /// Cards in the deck after the selection was applied.
    pub cards_before_draw: usize,
    /// The single card drawn first.
    pub first_card: Card,
    /// The hand drawn after the first card, in draw order.
    pub hand: Vec<Card>,
    /// Cards left in the deck at the end of the round.
    pub cards_remaining: usize,
}
