//! End-of-round counting of hands and the crib.

extern crate alloc;

use alloc::format;

use crate::scoring;

use super::{Game, Side};

impl Game {
    /// Restores pegged cards, reveals the computer hand and crib, and counts
    /// in standard order: non-dealer's hand, dealer's hand, dealer's crib.
    ///
    /// Each tally goes through the win check before the next begins; the
    /// first score to reach the threshold ends the game and the remaining
    /// tallies never happen. Returns `true` on a win.
    pub(super) fn score_hands(&mut self) -> bool {
        self.pegging.clear();
        self.player_hand.restore_pegged();
        self.computer_hand.restore_pegged();
        self.hands_revealed = true;

        let dealer = self.dealer();
        let non_dealer = dealer.other();

        if self.count_hand(non_dealer) {
            return true;
        }
        if self.count_hand(dealer) {
            return true;
        }
        self.count_crib(dealer)
    }

    fn count_hand(&mut self, side: Side) -> bool {
        let cut = self.cut_card.expect("cut card is drawn before counting");
        let cards = match side {
            Side::Player => self.player_hand.cards(),
            Side::Computer => self.computer_hand.cards(),
        };

        let points = scoring::score_hand(cards, cut, false)
            .expect("a restored hand holds exactly four cards")
            .total();
        self.append_status(format!("{} scored {points} in its hand.", side.name()));

        if self.award(side, points) {
            self.declare_winner(side);
            return true;
        }
        false
    }

    fn count_crib(&mut self, dealer: Side) -> bool {
        let cut = self.cut_card.expect("cut card is drawn before counting");

        let points = scoring::score_hand(self.crib.cards(), cut, true)
            .expect("the crib holds exactly four cards")
            .total();
        self.append_status(format!("{} scored {points} in the crib.", dealer.name()));

        if self.award(dealer, points) {
            self.declare_winner(dealer);
            return true;
        }
        false
    }
}
