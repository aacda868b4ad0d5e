//! Hand container for held and pegged cards.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A hand of cards.
///
/// Cards a side has committed to the pegging stack leave the held set but
/// stay owned by the hand in a side list, so they can be restored for
/// end-of-round counting. A card is a member of exactly one of
/// {held, pegged} at any time; discarding to the crib moves the card to a
/// different [`Hand`] entirely.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Held cards, kept sorted by rank then suit.
    cards: Vec<Card>,
    /// Cards committed to pegging this round.
    pegged: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            pegged: Vec::new(),
        }
    }

    /// Adds a card to the held set, keeping sort order.
    pub fn insert(&mut self, card: Card) {
        self.cards.push(card);
        self.cards.sort_unstable();
    }

    /// Removes and returns the held card at `index`, or `None` if out of
    /// range.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Moves the held card at `index` to the pegged set and returns it.
    ///
    /// The card stays owned by the hand so it can come back for counting;
    /// see [`Self::restore_pegged`].
    pub fn peg(&mut self, index: usize) -> Option<Card> {
        let card = self.remove(index)?;
        self.pegged.push(card);
        Some(card)
    }

    /// Drains the pegged set back into the held set, restoring sort order.
    ///
    /// Total and idempotent: an empty pegged set is a no-op.
    pub fn restore_pegged(&mut self) {
        self.cards.append(&mut self.pegged);
        self.cards.sort_unstable();
    }

    /// Clears both the held and pegged sets.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.pegged.clear();
    }

    /// Returns the held cards in sorted order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards committed to pegging this round.
    #[must_use]
    pub fn pegged_cards(&self) -> &[Card] {
        &self.pegged
    }

    /// Returns the held card at `index` without removing it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns the number of held cards (pegged cards excluded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the held set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
