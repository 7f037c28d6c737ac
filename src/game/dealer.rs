use crate::error::RoundError;
use crate::result::{Finish, Outcome, RoundResult};

use super::{Reveal, Round, RoundState};

impl Round<'_> {
    /// Dealer plays their hand.
    ///
    /// The dealer draws while below the standing total, lowering aces when a
    /// draw goes over the target. Returns every card drawn with the running
    /// total after it.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer-draw state or the
    /// deck runs out while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Reveal>, RoundError> {
        self.ensure_state(RoundState::DealerDraw)?;

        let mut drawn = Vec::new();
        while self.dealer.points() < self.options.dealer_stands_on {
            let card = self.draw()?;
            let points = self.dealer.take(card, self.options.win_points);
            log::debug!("dealer draws {card}, total {points}");
            drawn.push(Reveal { card, points });
        }

        self.transition(RoundState::Resolution);
        Ok(drawn)
    }

    /// Compares the totals and ends the round.
    ///
    /// A dealer bust is a player win; otherwise the higher total wins and
    /// equal totals tie.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not ready for resolution.
    pub fn resolve(&mut self) -> Result<RoundResult, RoundError> {
        self.ensure_state(RoundState::Resolution)?;

        let player_points = self.player.points();
        let dealer_points = self.dealer.points();

        let (outcome, finish) = if self.dealer.is_bust(self.options.win_points) {
            (Outcome::Win, Finish::DealerBust)
        } else if player_points > dealer_points {
            (Outcome::Win, Finish::Showdown)
        } else if player_points == dealer_points {
            (Outcome::Tie, Finish::Showdown)
        } else {
            (Outcome::Lose, Finish::Showdown)
        };

        Ok(self.finish(RoundResult {
            outcome,
            finish,
            player_points,
            dealer_points,
        }))
    }
}
