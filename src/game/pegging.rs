//! Pegging phase: the computer's play loop and round closure.

extern crate alloc;

use alloc::format;

use super::{Game, GameState, Side};

impl Game {
    /// Pegs the hand card at `index` for `side` onto the stack and returns
    /// the points the play scores. Legality must be checked beforehand.
    pub(super) fn commit_play(&mut self, side: Side, index: usize) -> u32 {
        let hand = match side {
            Side::Player => &mut self.player_hand,
            Side::Computer => &mut self.computer_hand,
        };
        let card = hand.peg(index).expect("play index was validated");
        self.pegging
            .play(card)
            .expect("play legality was validated against the 31 cap")
    }

    /// The computer pegs once if able, then keeps pegging while the player
    /// cannot play and the computer can. Returns `true` if the computer won
    /// mid-loop.
    pub(super) fn computer_play(&mut self) -> bool {
        if !self.computer_can_peg() {
            return false;
        }

        loop {
            let Some(index) = self
                .strategy
                .choose_play(self.computer_hand.cards(), &self.pegging)
            else {
                break;
            };

            // A strategy pick that is out of range or illegal counts as a
            // "go"; FirstLegal never produces one.
            let legal = self
                .computer_hand
                .get(index)
                .is_some_and(|card| self.pegging.can_accept(card));
            if !legal {
                break;
            }

            self.player_pegged_last = false;
            let points = self.commit_play(Side::Computer, index);

            if points > 0 {
                self.append_status(format!("Computer pegged {points} points."));
                if self.award(Side::Computer, points) {
                    self.declare_winner(Side::Computer);
                    return true;
                }
            }

            if self.player_can_peg() || !self.computer_can_peg() {
                break;
            }
        }

        false
    }

    /// When neither side can play, awards the last-card point and parks the
    /// game until the next pegging round. Returns `true` on a win.
    ///
    /// A stack sitting at exactly 31 gets no last-card point: those two
    /// points were already scored when the 31 was made.
    pub(super) fn finish_play_if_stuck(&mut self) -> bool {
        if self.player_can_peg() || self.computer_can_peg() {
            return false;
        }

        if self.pegging.total() != 31 {
            let side = if self.player_pegged_last {
                Side::Player
            } else {
                Side::Computer
            };
            let win = self.award(side, 1);
            self.append_status(format!("{} pegged 1 point for last card.", side.name()));
            if win {
                self.declare_winner(side);
                return true;
            }
        }

        self.append_status("Pegging round completed. Advance the round to continue.".into());
        self.state = GameState::PeggingWaitingForNextRound;

        false
    }

    /// Whether the player holds a card that fits under the 31 cap.
    pub(super) fn player_can_peg(&self) -> bool {
        self.player_hand
            .cards()
            .iter()
            .any(|&card| self.pegging.can_accept(card))
    }

    /// Whether the computer holds a card that fits under the 31 cap.
    pub(super) fn computer_can_peg(&self) -> bool {
        self.computer_hand
            .cards()
            .iter()
            .any(|&card| self.pegging.can_accept(card))
    }
}
