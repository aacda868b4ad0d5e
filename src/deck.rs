//! Deck with an explicit draw cursor.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A standard 52-card deck.
///
/// The deck always owns all 52 distinct cards; drawing only advances a
/// cursor, so reshuffling never needs previously dealt cards returned.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Current permutation of the 52 cards.
    cards: [Card; DECK_SIZE],
    /// Index of the next card to draw.
    next: usize,
}

fn standard_order() -> [Card; DECK_SIZE] {
    core::array::from_fn(|i| Card::new(Rank::ALL[i % 13], Suit::ALL[i / 13]))
}

const fn card_index(card: Card) -> usize {
    card.suit as usize * 13 + (card.rank.sequence() as usize - 1)
}

impl Deck {
    /// Creates a deck shuffled with the given RNG, cursor at the start.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self {
            cards: standard_order(),
            next: 0,
        };
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck from an explicit card order, cursor at the start.
    ///
    /// Useful for deterministic replays and tests.
    ///
    /// # Errors
    ///
    /// Returns an error unless `cards` contains each of the 52 cards exactly
    /// once.
    pub fn arranged(cards: [Card; DECK_SIZE]) -> Result<Self, DeckError> {
        let mut seen = [false; DECK_SIZE];
        for &card in &cards {
            let index = card_index(card);
            if seen[index] {
                return Err(DeckError::IncompleteDeck);
            }
            seen[index] = true;
        }

        Ok(Self { cards, next: 0 })
    }

    /// Shuffles the deck into a fresh permutation and resets the draw cursor.
    ///
    /// Drawn cards are never removed, so there is nothing to return to the
    /// deck first.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.next = 0;
    }

    /// Draws the next card, or `None` if all 52 have been drawn.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.next).copied();
        if card.is_some() {
            self.next += 1;
        }
        card
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.next
    }
}
