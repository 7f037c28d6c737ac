//! Running hand totals for the player and the dealer.

use crate::card::Card;

/// Points lost when an ace drops from 11 to 1.
const ACE_DIFF: u8 = 10;

/// A hand's running total.
///
/// Cards are not kept: each revealed card adds its value to `points`, and
/// aces are counted so they can later be revalued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hand {
    /// Running point total.
    points: u8,
    /// Aces still valued at 11.
    aces: u8,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: 0, aces: 0 }
    }

    /// Adds a revealed card to the running total.
    ///
    /// Aces are added at 11 and tracked as soft.
    pub const fn add_card(&mut self, card: Card) {
        self.points = self.points.saturating_add(card.value());
        if card.is_ace() {
            self.aces += 1;
        }
    }

    /// Revalues soft aces from 11 to 1, one at a time, until the total is at
    /// most `target` or no soft aces remain.
    ///
    /// Returns the updated total. With no soft aces this is a no-op.
    pub const fn lower_aces(&mut self, target: u8) -> u8 {
        while self.aces > 0 {
            self.points -= ACE_DIFF;
            self.aces -= 1;
            if self.points <= target {
                break;
            }
        }
        self.points
    }

    /// Adds a card, then lowers aces if the hand went over `target`.
    ///
    /// Returns the updated total.
    pub const fn take(&mut self, card: Card, target: u8) -> u8 {
        self.add_card(card);
        if self.points > target && self.aces > 0 {
            self.lower_aces(target);
        }
        self.points
    }

    /// Returns the running total.
    #[must_use]
    pub const fn points(&self) -> u8 {
        self.points
    }

    /// Returns the number of aces still valued at 11.
    #[must_use]
    pub const fn soft_aces(&self) -> u8 {
        self.aces
    }

    /// Returns whether the hand holds an ace valued at 11.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.aces > 0
    }

    /// Returns whether the total is over `target`.
    #[must_use]
    pub const fn is_bust(&self, target: u8) -> bool {
        self.points > target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    const fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    #[test]
    fn add_card_tracks_aces() {
        let mut hand = Hand::new();
        hand.add_card(card(Rank::Ace));
        hand.add_card(card(Rank::Nine));
        assert_eq!(hand.points(), 20);
        assert_eq!(hand.soft_aces(), 1);
        assert!(hand.is_soft());
    }

    #[test]
    fn lower_single_ace() {
        let mut hand = Hand { points: 22, aces: 1 };
        assert_eq!(hand.lower_aces(21), 12);
        assert_eq!(hand.soft_aces(), 0);
    }

    #[test]
    fn lower_stops_at_first_non_bust() {
        let mut hand = Hand { points: 23, aces: 2 };
        assert_eq!(hand.lower_aces(21), 13);
        assert_eq!(hand.soft_aces(), 1);
    }

    #[test]
    fn lower_without_aces_is_noop() {
        let mut hand = Hand { points: 25, aces: 0 };
        assert_eq!(hand.lower_aces(21), 25);
        assert_eq!(hand.soft_aces(), 0);
    }

    #[test]
    fn take_two_aces() {
        let mut hand = Hand::new();
        assert_eq!(hand.take(card(Rank::Ace), 21), 11);
        assert_eq!(hand.take(card(Rank::Ace), 21), 12);
        assert_eq!(hand.soft_aces(), 1);
    }

    #[test]
    fn take_busts_without_aces() {
        let mut hand = Hand::new();
        hand.take(card(Rank::King), 21);
        hand.take(card(Rank::Queen), 21);
        assert_eq!(hand.take(card(Rank::Five), 21), 25);
        assert!(hand.is_bust(21));
    }
}
