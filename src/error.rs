//! Error types for deck, round and session operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card was requested twice.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this step.
    #[error("invalid round state for this step")]
    InvalidState,
    /// Every card in the deck has been revealed.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

/// Errors that can occur while running a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing narration failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// A round step failed.
    #[error(transparent)]
    Round(#[from] RoundError),
}
