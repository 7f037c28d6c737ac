//! Round state types.

use crate::card::Card;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Dealer's first card is about to be revealed.
    DealerOpen,
    /// Player's two opening cards are about to be revealed.
    PlayerInitialDeal,
    /// Waiting for the player to hit or stand.
    PlayerDecision,
    /// Dealer draws to its standing total.
    DealerDraw,
    /// Totals are ready to be compared.
    Resolution,
    /// Round is over and its result is fixed.
    Terminal,
}

/// A revealed card and the hand total it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    /// The card revealed.
    pub card: Card,
    /// The hand total after the card, with aces lowered if needed.
    pub points: u8,
}
