//! Pluggable computer-opponent policy.

use crate::card::Card;
use crate::pegging::PeggingStack;

/// Decision policy for the computer side.
///
/// The state machine only talks to this trait, so a stronger opponent can
/// be substituted without touching the game flow. Indices are into the
/// sorted held cards of the computer's hand.
pub trait Strategy {
    /// Picks a held card to discard to the crib (called while the hand
    /// holds more than four cards).
    fn choose_discard(&mut self, held: &[Card]) -> usize;

    /// Picks a held card to play onto the pegging stack, or `None` to say
    /// "go" when no held card fits under 31.
    fn choose_play(&mut self, held: &[Card], stack: &PeggingStack) -> Option<usize>;
}

/// Placeholder policy: the first held card for discards, the first legal
/// held card for plays.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegal;

impl Strategy for FirstLegal {
    fn choose_discard(&mut self, _held: &[Card]) -> usize {
        0
    }

    fn choose_play(&mut self, held: &[Card], stack: &PeggingStack) -> Option<usize> {
        held.iter().position(|&card| stack.can_accept(card))
    }
}
