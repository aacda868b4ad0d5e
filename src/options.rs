//! Game configuration options.

/// Score a side must reach or exceed to win a short game.
pub const SHORT_GAME_SCORE: u32 = 10;

/// Score a side must reach or exceed to win a full game.
pub const FULL_GAME_SCORE: u32 = 121;

/// Configuration options for a cribbage game.
///
/// ```
/// use cribrs::{GameOptions, FULL_GAME_SCORE};
///
/// let options = GameOptions::default().with_winning_score(FULL_GAME_SCORE);
/// assert_eq!(options.winning_score, 121);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// First side to reach or exceed this score wins immediately.
    pub winning_score: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            winning_score: SHORT_GAME_SCORE,
        }
    }
}

impl GameOptions {
    /// Sets the winning score.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(61);
    /// assert_eq!(options.winning_score, 61);
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, winning_score: u32) -> Self {
        self.winning_score = winning_score;
        self
    }
}
