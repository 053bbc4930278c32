//! Error types for game operations.

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards remain to draw.
    #[error("deck exhausted")]
    Exhausted,
}

/// Errors that can occur during round actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Exhausted => Self::NoCards,
        }
    }
}

/// Error returned when a hit/stand answer is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected 'h' or 's'")]
pub struct ParseDecisionError;

/// Errors that end a console session.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// A round action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
}
