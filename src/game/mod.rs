//! Round controller.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::RoundResult;

mod actions;
mod dealer;
pub mod state;

pub use state::{Reveal, RoundState};

/// One round of twenty-one between the player and the dealer.
///
/// The round reads the deck through its own cursor and owns fresh hands, so
/// nothing carries over between rounds. Steps must be taken in order:
///
/// 1. [`open_dealer`](Round::open_dealer)
/// 2. [`deal_player`](Round::deal_player)
/// 3. [`hit`](Round::hit) any number of times, then [`stand`](Round::stand)
/// 4. [`dealer_play`](Round::dealer_play)
/// 5. [`resolve`](Round::resolve)
///
/// The round may end early at step 2 or 3; check [`state`](Round::state) or
/// [`result`](Round::result) after each step.
///
/// # Example
///
/// ```
/// use twentyone::{Deck, GameOptions, Round, RoundState};
///
/// let deck = Deck::new();
/// let mut round = Round::new(&deck, GameOptions::default());
/// let open = round.open_dealer().unwrap();
/// assert_eq!(open.points, 2);
/// assert_eq!(round.state(), RoundState::PlayerInitialDeal);
/// ```
#[derive(Debug, Clone)]
pub struct Round<'d> {
    /// The deck being dealt from.
    deck: &'d Deck,
    /// Game options.
    options: GameOptions,
    /// Index of the next card to reveal.
    cursor: usize,
    /// Dealer's hand.
    dealer: Hand,
    /// Player's hand.
    player: Hand,
    /// Current round state.
    state: RoundState,
    /// Result, once the round is terminal.
    result: Option<RoundResult>,
}

impl<'d> Round<'d> {
    /// Starts a round at the top of `deck`.
    #[must_use]
    pub const fn new(deck: &'d Deck, options: GameOptions) -> Self {
        Self {
            deck,
            options,
            cursor: 0,
            dealer: Hand::new(),
            player: Hand::new(),
            state: RoundState::DealerOpen,
            result: None,
        }
    }

    /// Reveals the next card from the deck.
    fn draw(&mut self) -> Result<Card, RoundError> {
        let card = self.deck.card(self.cursor).ok_or(RoundError::DeckExhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    fn ensure_state(&self, expected: RoundState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    fn transition(&mut self, next: RoundState) {
        log::debug!("round {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn finish(&mut self, result: RoundResult) -> RoundResult {
        log::info!(
            "round over: {:?} ({:?}), player {} dealer {}",
            result.outcome,
            result.finish,
            result.player_points,
            result.dealer_points
        );
        self.result = Some(result);
        self.transition(RoundState::Terminal);
        result
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the result once the round is terminal.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the number of cards revealed so far.
    #[must_use]
    pub const fn cards_dealt(&self) -> usize {
        self.cursor
    }

    /// Returns the game options in effect.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }
}
