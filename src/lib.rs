//! A cribbage game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full match flow:
//! discarding to the crib, alternating pegging plays, end-of-round hand and
//! crib counting, and win detection. The scoring rules themselves live in
//! [`scoring`] as pure functions and can be used on their own.
//!
//! # Example
//!
//! ```no_run
//! use cribrs::{Game, GameOptions, Input};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.handle_input(Input::CardSelect(0));
//! let view = game.snapshot();
//! let _ = view;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pegging;
pub mod scoring;
pub mod strategy;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, PlayError, ScoreError};
pub use game::{Game, GameState, Input, Side};
pub use hand::Hand;
pub use options::{FULL_GAME_SCORE, GameOptions, SHORT_GAME_SCORE};
pub use pegging::{MAX_PEG_TOTAL, PeggingStack};
pub use scoring::{HandScore, score_hand, score_pegging};
pub use strategy::{FirstLegal, Strategy};
pub use view::{CardView, GameView};
