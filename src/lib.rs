//! A console game of twenty-one against a computer dealer.
//!
//! The crate provides a [`Round`] type that steps through one round (dealer
//! opens, player is dealt two cards, hits or stands, dealer draws to 17, totals
//! are compared) and a [`Session`] that replays rounds over one deck.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use twentyone::{Deck, GameOptions, Round, RoundState};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut deck = Deck::new();
//! deck.shuffle(&mut rng);
//!
//! let mut round = Round::new(&deck, GameOptions::default());
//! round.open_dealer().unwrap();
//! round.deal_player().unwrap();
//! if round.state() == RoundState::PlayerDecision {
//!     round.stand().unwrap();
//!     round.dealer_play().unwrap();
//!     round.resolve().unwrap();
//! }
//! assert!(round.result().is_some());
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::{Action, Console, Reply};
pub use deck::Deck;
pub use error::{DeckError, RoundError, SessionError};
pub use game::{Reveal, Round, RoundState};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{Finish, Outcome, RoundResult};
pub use session::{Session, SessionStats};
