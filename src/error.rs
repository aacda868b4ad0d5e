//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when scoring a hand or crib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// A hand or crib must hold exactly four cards when counted.
    #[error("hand must hold exactly 4 cards")]
    HandSize,
}

/// Errors that can occur when playing onto the pegging stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Playing the card would push the running total past 31.
    #[error("play would push the pegging total past 31")]
    ExceedsThirtyOne,
}

/// Errors that can occur when building a deck from an explicit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The given cards are not the 52 distinct cards of a full deck.
    #[error("not the 52 distinct cards of a full deck")]
    IncompleteDeck,
}
