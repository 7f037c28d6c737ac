//! The 52-card deck.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A standard deck of 52 distinct cards.
///
/// Dealing never mutates the deck: rounds read cards through an external
/// cursor with [`Deck::card`]. Only [`Deck::shuffle`] reorders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    /// Creates an ordered, unshuffled deck.
    ///
    /// Cards are laid out suit by suit (clubs, diamonds, spades, hearts), each
    /// suit running from 2 up to ace.
    #[must_use]
    pub fn new() -> Self {
        let cards = core::array::from_fn(|index| {
            let suit = Suit::ALL[index / Rank::ALL.len()];
            let rank = Rank::ALL[index % Rank::ALL.len()];
            Card::new(rank, suit)
        });
        Self { cards }
    }

    /// Creates a deck whose first cards are `top`, in order, followed by the
    /// remaining cards in the ordered layout of [`Deck::new`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if `top` names a card twice.
    pub fn stacked(top: &[Card]) -> Result<Self, DeckError> {
        for (index, card) in top.iter().enumerate() {
            if top[..index].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        let rest = Self::new();
        let mut ordered = top.to_vec();
        ordered.extend(rest.cards.iter().filter(|card| !top.contains(card)));

        let mut cards = rest.cards;
        cards.copy_from_slice(&ordered);
        Ok(Self { cards })
    }

    /// Shuffles the deck in place.
    ///
    /// The generator is borrowed, never re-seeded, so successive shuffles
    /// within a session stay independent.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        log::debug!("deck shuffled, top card {}", self.cards[0]);
    }

    /// Returns the card at `index`, or `None` past the end of the deck.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub const fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub const fn len(&self) -> usize {
        DECK_SIZE
    }

    /// A deck is never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn new_deck_holds_every_card_once() {
        let deck = Deck::new();
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(deck.cards().len(), DECK_SIZE);
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn new_deck_is_ordered_by_suit_then_rank() {
        let deck = Deck::new();
        assert_eq!(deck.card(0), Some(Card::new(Rank::Two, Suit::Clubs)));
        assert_eq!(deck.card(12), Some(Card::new(Rank::Ace, Suit::Clubs)));
        assert_eq!(deck.card(13), Some(Card::new(Rank::Two, Suit::Diamonds)));
        assert_eq!(deck.card(51), Some(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!(deck.card(52), None);
    }

    #[test]
    fn stacked_deck_puts_given_cards_on_top() {
        let top = [
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Spades),
        ];
        let deck = Deck::stacked(&top).unwrap();
        assert_eq!(deck.card(0), Some(top[0]));
        assert_eq!(deck.card(1), Some(top[1]));
        assert_eq!(deck.card(2), Some(Card::new(Rank::Two, Suit::Clubs)));

        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn stacked_deck_rejects_duplicates() {
        let card = Card::new(Rank::Nine, Suit::Hearts);
        assert_eq!(
            Deck::stacked(&[card, card]).unwrap_err(),
            DeckError::DuplicateCard(card)
        );
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let mut shuffled = deck.cards().to_vec();
        let mut ordered = Deck::new().cards().to_vec();
        shuffled.sort_by_key(|card| (card.suit, card.rank));
        ordered.sort_by_key(|card| (card.suit, card.rank));
        assert_eq!(shuffled, ordered);
    }

    #[test]
    fn repeated_shuffles_differ() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        let first = deck.clone();
        deck.shuffle(&mut rng);
        assert_ne!(first, deck);
    }

    #[test]
    fn shuffle_spreads_cards_evenly_over_the_top_position() {
        const TRIALS: usize = 52 * 100;

        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let ordered = Deck::new();
        let mut counts = [0_usize; DECK_SIZE];

        for _ in 0..TRIALS {
            let mut deck = ordered.clone();
            deck.shuffle(&mut rng);
            let top = deck.card(0).unwrap();
            let index = ordered.cards().iter().position(|c| *c == top).unwrap();
            counts[index] += 1;
        }

        // Expect 100 per card; the bounds sit five standard deviations out.
        for (index, count) in counts.iter().enumerate() {
            assert!((50..=150).contains(count), "card {index} seen {count} times");
        }
    }
}
