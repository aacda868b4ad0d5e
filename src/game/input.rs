//! Input dispatch: the state machine's transition table.

extern crate alloc;

use alloc::format;

use crate::card::Rank;

use super::{Game, GameState, Input, Side};

impl Game {
    /// Processes one discrete input to completion.
    ///
    /// Recoverable problems (out-of-phase input, a play that would exceed
    /// 31) never change state; they surface as status lines instead. A
    /// `CardSelect` index at or beyond the player's current hand size is a
    /// silent no-op. Any chained computer plays run before this returns.
    pub fn handle_input(&mut self, input: Input) {
        if let Input::CardSelect(index) = input {
            if index >= self.player_hand.len() {
                return;
            }
        }

        match self.state {
            GameState::PlayerDiscard => self.handle_discard(input),
            GameState::Pegging => self.handle_pegging_input(input),
            GameState::PeggingWaitingForNextRound => self.handle_between_rounds(input),
            GameState::CountPoints => match input {
                Input::AdvanceRound => self.initialize_round(true),
                Input::CardSelect(_) => {
                    self.append_status(
                        "Invalid input. Advance the round to continue the game.".into(),
                    );
                }
            },
            GameState::GameOver => match input {
                Input::AdvanceRound => self.initialize_game(),
                Input::CardSelect(_) => {
                    self.append_status(
                        "Invalid input. Advance the round to start a new game.".into(),
                    );
                }
            },
        }
    }

    fn handle_discard(&mut self, input: Input) {
        let Input::CardSelect(index) = input else {
            self.append_status("Invalid input. Select a card to discard.".into());
            return;
        };

        debug_assert!(self.player_hand.len() > 4, "discard state implies a 5+ card hand");

        if self.player_hand.len() > 4 {
            if let Some(card) = self.player_hand.remove(index) {
                self.crib.insert(card);
            }
        }

        if self.player_hand.len() == 4 {
            self.begin_pegging();
        }
    }

    /// Draws the cut card and opens the pegging phase. The dealer scores two
    /// for a Jack cut ("his heels"), which can end the game on the spot.
    fn begin_pegging(&mut self) {
        self.state = GameState::Pegging;

        let cut = self.deck.draw().expect("deck holds a cut card after the deal");
        self.cut_card = Some(cut);

        if cut.rank == Rank::Jack {
            let dealer = self.dealer();
            let win = self.award(dealer, 2);
            self.append_status(format!("{} scores 2 for jack cut card.", dealer.name()));
            if win {
                self.declare_winner(dealer);
                return;
            }
        }

        // The non-dealer pegs first.
        if self.player_is_dealer {
            self.append_status("Player's deal - computer goes first.".into());
            let _ = self.computer_play();
        } else {
            self.append_status("Computer's deal - player goes first.".into());
        }
    }

    fn handle_pegging_input(&mut self, input: Input) {
        let Input::CardSelect(index) = input else {
            self.append_status("Invalid input. Select a card to continue pegging.".into());
            return;
        };

        let Some(card) = self.player_hand.get(index) else {
            return;
        };

        if !self.pegging.can_accept(card) {
            self.append_status("Can't play card! Total points would exceed 31.".into());
            return;
        }

        self.player_pegged_last = true;
        let points = self.commit_play(Side::Player, index);

        if points > 0 {
            let win = self.award(Side::Player, points);
            self.append_status(format!("Player pegged {points} points."));
            if win {
                self.declare_winner(Side::Player);
                return;
            }
        }

        if self.computer_play() {
            return;
        }

        self.finish_play_if_stuck();
    }

    fn handle_between_rounds(&mut self, input: Input) {
        if input != Input::AdvanceRound {
            self.append_status("Invalid input. Advance the round to continue the game.".into());
            return;
        }

        self.pegging.clear();

        // Both sides out of cards: count hands and crib, then either the
        // game is over or the round closes out.
        if self.player_hand.is_empty() && self.computer_hand.is_empty() {
            if !self.score_hands() {
                self.state = GameState::CountPoints;
            }
            return;
        }

        self.append_status("Commencing next pegging round.".into());
        self.state = GameState::Pegging;

        // The computer leads when it is due or the player is out of cards.
        if (self.player_pegged_last && self.computer_can_peg()) || self.player_hand.is_empty() {
            if self.computer_play() {
                return;
            }
        }

        self.finish_play_if_stuck();
    }
}
