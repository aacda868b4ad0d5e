//! Game state and input types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player to discard down to four cards.
    PlayerDiscard,
    /// Alternating pegging plays onto the shared stack.
    Pegging,
    /// A pegging round finished; waiting for the advance action.
    PeggingWaitingForNextRound,
    /// Hands and crib have been counted; waiting to start the next round.
    CountPoints,
    /// A side has won; waiting to start a fresh game.
    GameOver,
}

/// A discrete action from the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Select the player's held card at this index, to discard or play it.
    ///
    /// An index at or beyond the current hand size is silently ignored.
    CardSelect(usize),
    /// Advance past a round boundary. Only does anything in
    /// [`GameState::PeggingWaitingForNextRound`], [`GameState::CountPoints`],
    /// and [`GameState::GameOver`].
    AdvanceRound,
}

/// One of the two sides of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

impl Side {
    /// Returns the display name used in status lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Computer => "Computer",
        }
    }

    /// Returns the opposite side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }
}
