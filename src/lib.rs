//! A single-player blackjack game against a fixed-strategy dealer.
//!
//! The crate provides a [`Game`] type that runs one round at a time: a fresh
//! shuffled deck, the initial deal, the player's hit/stand turn, the dealer's
//! draw-to-17 turn, and the showdown. With the `std` feature, [`Console`]
//! plays rounds over any line-based reader and writer.
//!
//! # Example
//!
//! ```no_run
//! use bjcli::{Decision, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let result = game.play_round(|hand| {
//!     if hand.value() < 15 { Decision::Hit } else { Decision::Stand }
//! });
//! let _ = result;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::Console;
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::ConsoleError;
pub use error::{ActionError, DeckError, ParseDecisionError};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use participant::{DEALER_STANDS_ON, Decision, Participant, Strategy};
pub use result::{Outcome, RoundResult};
