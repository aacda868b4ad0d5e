//! Read-only render state for a display layer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameState;

/// A card as a display should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    /// The card itself.
    pub card: Card,
    /// Whether the front of the card should be shown.
    pub face_up: bool,
}

/// Immutable snapshot of everything a display needs to render the table.
///
/// Produced by [`crate::Game::snapshot`] after each processed input. The
/// snapshot owns its data; it stays valid while the game moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    /// Current state of the game.
    pub state: GameState,
    /// The player's held cards (face up).
    pub player_hand: Vec<CardView>,
    /// The computer's held cards (face down until counting).
    pub computer_hand: Vec<CardView>,
    /// The crib (face down until counting).
    pub crib: Vec<CardView>,
    /// The shared pegging pile, oldest first (face up).
    pub pegging: Vec<CardView>,
    /// Running total of the pegging pile.
    pub pegging_total: u8,
    /// The cut card, absent outside the pegging and counting phases.
    pub cut_card: Option<Card>,
    /// The player's score.
    pub player_score: u32,
    /// The computer's score.
    pub computer_score: u32,
    /// Whether the player dealt this round.
    pub player_is_dealer: bool,
    /// Whether the "advance round" action currently does anything.
    pub advance_enabled: bool,
}
