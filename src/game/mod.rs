//! Game session and state machine.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::pegging::PeggingStack;
use crate::strategy::{FirstLegal, Strategy};
use crate::view::{CardView, GameView};

mod counting;
mod input;
mod pegging;
pub mod state;

pub use state::{GameState, Input, Side};

/// Number of cards dealt to each side at the start of a round.
const DEAL_SIZE: usize = 6;

/// A cribbage game session between the player and the computer.
///
/// The session owns all mutable state: deck, hands, crib, pegging stack,
/// scores, and the current [`GameState`]. It is single-threaded and
/// turn-based; [`Game::handle_input`] processes one discrete input to
/// completion (including any chained computer plays) and returns. A display
/// layer pulls [`Game::snapshot`] after each input and drains the advisory
/// status stream with [`Game::drain_status`].
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The deck; reshuffled at the start of every round.
    deck: Deck,
    /// The player's hand.
    player_hand: Hand,
    /// The computer's hand.
    computer_hand: Hand,
    /// The crib, counted for the dealer at the end of the round.
    crib: Hand,
    /// The shared pegging stack.
    pegging: PeggingStack,
    /// The cut card, absent outside the pegging and counting phases.
    cut_card: Option<Card>,
    /// Whether the player dealt this round. The flag flips in
    /// `initialize_round`, so it starts inverted; the player deals first.
    player_is_dealer: bool,
    /// Which side committed the most recent pegging play.
    player_pegged_last: bool,
    /// Whether the computer hand and crib have been revealed for counting.
    hands_revealed: bool,
    /// The player's score.
    player_score: u32,
    /// The computer's score.
    computer_score: u32,
    /// Current game state.
    state: GameState,
    /// Random number generator for shuffles.
    rng: ChaCha8Rng,
    /// Decision policy for the computer side.
    strategy: Box<dyn Strategy>,
    /// Pending human-readable status lines for the display.
    status: Vec<String>,
}

impl Game {
    /// Creates a new game with the given seed and starts the first round.
    ///
    /// The computer plays the placeholder [`FirstLegal`] strategy; see
    /// [`Game::with_strategy`] to substitute another.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::PlayerDiscard);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_strategy(options, seed, Box::new(FirstLegal))
    }

    /// Creates a new game with a custom computer strategy.
    #[must_use]
    pub fn with_strategy(options: GameOptions, seed: u64, strategy: Box<dyn Strategy>) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        let mut game = Self::bare(options, deck, rng, strategy);
        game.initialize_round(true);
        game
    }

    /// Creates a new game whose first round is dealt from `deck` as ordered:
    /// six cards to the computer, six to the player, then the cut card.
    ///
    /// Later rounds shuffle as usual. Useful for deterministic replays and
    /// tests.
    #[must_use]
    pub fn with_deck(options: GameOptions, seed: u64, deck: Deck) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = Self::bare(options, deck, rng, Box::new(FirstLegal));
        game.initialize_round(false);
        game
    }

    fn bare(options: GameOptions, deck: Deck, rng: ChaCha8Rng, strategy: Box<dyn Strategy>) -> Self {
        Self {
            options,
            deck,
            player_hand: Hand::new(),
            computer_hand: Hand::new(),
            crib: Hand::new(),
            pegging: PeggingStack::new(),
            cut_card: None,
            player_is_dealer: false,
            player_pegged_last: true,
            hands_revealed: false,
            player_score: 0,
            computer_score: 0,
            state: GameState::PlayerDiscard,
            rng,
            strategy,
            status: Vec::new(),
        }
    }

    /// Resets scores for a fresh game and starts its first round. The winner
    /// of the previous game deals first.
    fn initialize_game(&mut self) {
        if self.player_score != 0 || self.computer_score != 0 {
            // Set inverted; initialize_round flips the flag.
            self.player_is_dealer = self.player_score <= self.computer_score;
        }

        self.player_score = 0;
        self.computer_score = 0;

        self.initialize_round(true);
    }

    /// Resets all per-round containers and deals a new round. Scores are
    /// untouched.
    fn initialize_round(&mut self, reshuffle: bool) {
        if reshuffle {
            self.deck.shuffle(&mut self.rng);
        }

        self.cut_card = None;
        self.pegging.clear();
        self.hands_revealed = false;

        self.computer_hand.clear();
        for _ in 0..DEAL_SIZE {
            let card = self.deck.draw().expect("deck holds enough cards for a deal");
            self.computer_hand.insert(card);
        }

        self.player_hand.clear();
        for _ in 0..DEAL_SIZE {
            let card = self.deck.draw().expect("deck holds enough cards for a deal");
            self.player_hand.insert(card);
        }

        self.crib.clear();

        // Computer discards two cards to the crib up front.
        for _ in 0..2 {
            let chosen = self.strategy.choose_discard(self.computer_hand.cards());
            // A misbehaving strategy index falls back to the first card.
            let index = if chosen < self.computer_hand.len() { chosen } else { 0 };
            let card = self
                .computer_hand
                .remove(index)
                .expect("computer hand holds cards to discard");
            self.crib.insert(card);
        }

        self.state = GameState::PlayerDiscard;

        // Alternate the deal every round.
        self.player_is_dealer = !self.player_is_dealer;
    }

    /// Adds points to a side and reports whether that side has now won.
    fn award(&mut self, side: Side, points: u32) -> bool {
        let score = match side {
            Side::Player => &mut self.player_score,
            Side::Computer => &mut self.computer_score,
        };
        *score += points;
        *score >= self.options.winning_score
    }

    /// Announces the winner and enters the terminal state.
    fn declare_winner(&mut self, side: Side) {
        self.append_status(alloc::format!("{} WON!!", side.name()));
        self.state = GameState::GameOver;
    }

    /// The dealer of the current round.
    const fn dealer(&self) -> Side {
        if self.player_is_dealer {
            Side::Player
        } else {
            Side::Computer
        }
    }

    fn append_status(&mut self, line: String) {
        self.status.push(line);
    }

    /// Removes and returns the pending status lines, oldest first.
    pub fn drain_status(&mut self) -> Vec<String> {
        core::mem::take(&mut self.status)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's score.
    #[must_use]
    pub const fn player_score(&self) -> u32 {
        self.player_score
    }

    /// Returns the computer's score.
    #[must_use]
    pub const fn computer_score(&self) -> u32 {
        self.computer_score
    }

    /// Returns whether the player dealt this round.
    #[must_use]
    pub const fn player_is_dealer(&self) -> bool {
        self.player_is_dealer
    }

    /// Returns the cut card, if one has been drawn this round.
    #[must_use]
    pub const fn cut_card(&self) -> Option<Card> {
        self.cut_card
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the computer's hand.
    #[must_use]
    pub const fn computer_hand(&self) -> &Hand {
        &self.computer_hand
    }

    /// Returns the crib.
    #[must_use]
    pub const fn crib(&self) -> &Hand {
        &self.crib
    }

    /// Returns the shared pegging stack.
    #[must_use]
    pub const fn pegging_stack(&self) -> &PeggingStack {
        &self.pegging
    }

    /// Returns the winning side once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if self.state != GameState::GameOver {
            return None;
        }
        if self.player_score >= self.options.winning_score {
            Some(Side::Player)
        } else {
            Some(Side::Computer)
        }
    }

    /// Builds an immutable render snapshot of the table.
    #[must_use]
    pub fn snapshot(&self) -> GameView {
        let face = |cards: &[Card], face_up: bool| -> Vec<CardView> {
            cards.iter().map(|&card| CardView { card, face_up }).collect()
        };

        GameView {
            state: self.state,
            player_hand: face(self.player_hand.cards(), true),
            computer_hand: face(self.computer_hand.cards(), self.hands_revealed),
            crib: face(self.crib.cards(), self.hands_revealed),
            pegging: face(self.pegging.cards(), true),
            pegging_total: self.pegging.total(),
            cut_card: self.cut_card,
            player_score: self.player_score,
            computer_score: self.computer_score,
            player_is_dealer: self.player_is_dealer,
            advance_enabled: matches!(
                self.state,
                GameState::PeggingWaitingForNextRound
                    | GameState::CountPoints
                    | GameState::GameOver
            ),
        }
    }
}
