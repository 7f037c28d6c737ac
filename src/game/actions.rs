use crate::error::RoundError;
use crate::result::{Finish, Outcome, RoundResult};

use super::{Reveal, Round, RoundState};

impl Round<'_> {
    fn reveal_to_player(&mut self) -> Result<Reveal, RoundError> {
        let card = self.draw()?;
        let points = self.player.take(card, self.options.win_points);
        log::debug!("player takes {card}, total {points}");
        Ok(Reveal { card, points })
    }

    /// Ends the round if the player sits on exactly the target or over it.
    fn check_player_total(&mut self) {
        let points = self.player.points();
        let target = self.options.win_points;
        if points > target {
            self.finish(RoundResult {
                outcome: Outcome::Lose,
                finish: Finish::PlayerBust,
                player_points: points,
                dealer_points: self.dealer.points(),
            });
        } else if points == target {
            self.finish(RoundResult {
                outcome: Outcome::Win,
                finish: Finish::TwentyOne,
                player_points: points,
                dealer_points: self.dealer.points(),
            });
        }
    }

    /// Reveals the dealer's first card.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer-open state or the
    /// deck is exhausted.
    pub fn open_dealer(&mut self) -> Result<Reveal, RoundError> {
        self.ensure_state(RoundState::DealerOpen)?;

        let card = self.draw()?;
        let points = self.dealer.take(card, self.options.win_points);
        log::debug!("dealer opens {card}, total {points}");

        self.transition(RoundState::PlayerInitialDeal);
        Ok(Reveal { card, points })
    }

    /// Reveals the player's two opening cards.
    ///
    /// Two aces are lowered to a soft 12. If the opening total is exactly the
    /// target, the player wins immediately and the round becomes terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the initial-deal state or the
    /// deck is exhausted.
    pub fn deal_player(&mut self) -> Result<[Reveal; 2], RoundError> {
        self.ensure_state(RoundState::PlayerInitialDeal)?;

        let first = self.reveal_to_player()?;
        let second = self.reveal_to_player()?;

        self.transition(RoundState::PlayerDecision);
        self.check_player_total();
        Ok([first, second])
    }

    /// Player action: Hit (reveal one more card).
    ///
    /// A bust ends the round as a loss and the dealer does not draw. Reaching
    /// exactly the target ends it as a win.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for a player decision or
    /// the deck is exhausted.
    pub fn hit(&mut self) -> Result<Reveal, RoundError> {
        self.ensure_state(RoundState::PlayerDecision)?;

        let reveal = self.reveal_to_player()?;
        self.check_player_total();
        Ok(reveal)
    }

    /// Player action: Stand (hand control to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for a player decision.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_state(RoundState::PlayerDecision)?;
        log::debug!("player stands on {}", self.player.points());
        self.transition(RoundState::DealerDraw);
        Ok(())
    }
}
