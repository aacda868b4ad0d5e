//! The shared pegging stack.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PlayError;
use crate::scoring;

/// Maximum running total of the pegging stack.
pub const MAX_PEG_TOTAL: u8 = 31;

/// The shared pile of cards played during one pegging round.
///
/// Invariant: the running total never exceeds 31; a play that would push it
/// past is rejected and leaves the stack untouched.
#[derive(Debug, Clone, Default)]
pub struct PeggingStack {
    /// Played cards, oldest first.
    cards: Vec<Card>,
    /// Running point total of the played cards.
    total: u8,
}

impl PeggingStack {
    /// Creates a new empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
        }
    }

    /// Returns whether `card` can be played without exceeding 31.
    #[must_use]
    pub const fn can_accept(&self, card: Card) -> bool {
        card.point_value() + self.total <= MAX_PEG_TOTAL
    }

    /// Plays `card` onto the stack and returns the points it pegs.
    ///
    /// # Errors
    ///
    /// Returns an error if the play would push the running total past 31;
    /// the stack and total are unchanged in that case.
    pub fn play(&mut self, card: Card) -> Result<u32, PlayError> {
        if !self.can_accept(card) {
            return Err(PlayError::ExceedsThirtyOne);
        }

        self.total += card.point_value();
        self.cards.push(card);

        Ok(scoring::score_pegging(&self.cards))
    }

    /// Empties the stack and resets the total, at the start of a new
    /// pegging round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.total = 0;
    }

    /// Returns the played cards, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the running point total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the number of cards on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
