//! Session loop: repeated rounds over one deck and one random source.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::console::{self, Action, Console, Reply};
use crate::deck::Deck;
use crate::error::SessionError;
use crate::game::{Round, RoundState};
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};

/// Tally of finished rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Rounds played to the end.
    pub rounds: usize,
    /// Rounds the player won.
    pub wins: usize,
    /// Rounds the dealer won.
    pub losses: usize,
    /// Rounds that tied.
    pub ties: usize,
}

impl SessionStats {
    fn record(&mut self, result: &RoundResult) {
        self.rounds += 1;
        match result.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

/// A console session against the dealer.
///
/// The session owns the deck and a generator seeded once at construction;
/// every round reshuffles the same deck with it.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// use twentyone::{GameOptions, Session};
///
/// let input = Cursor::new("s\nn\n");
/// let mut session = Session::new(GameOptions::default(), 42, input, Vec::new());
/// let stats = session.run().unwrap();
/// assert_eq!(stats.rounds, 1);
/// ```
#[derive(Debug)]
pub struct Session<R, W> {
    /// The deck, reshuffled at the start of every round.
    deck: Deck,
    /// Random number generator.
    rng: ChaCha8Rng,
    /// Game options.
    options: GameOptions,
    /// Player console.
    console: Console<R, W>,
    /// Finished-round tally.
    stats: SessionStats,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with the given seed.
    pub fn new(options: GameOptions, seed: u64, input: R, output: W) -> Self {
        log::debug!("session seeded with {seed}");
        Self {
            deck: Deck::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            options,
            console: Console::new(input, output),
            stats: SessionStats::default(),
        }
    }

    /// Plays rounds until the player declines another or input closes.
    ///
    /// # Errors
    ///
    /// Returns an error if console i/o fails or a round step fails.
    pub fn run(&mut self) -> Result<SessionStats, SessionError> {
        loop {
            if self.play_round()?.is_none() {
                break;
            }

            let reply = self.console.prompt(console::REPLAY_PROMPT)?;
            match reply.as_deref().map(Reply::parse) {
                Some(Reply::Yes) => self.console.say("")?,
                Some(Reply::No) | None => break,
            }
        }

        log::info!(
            "session over: {} rounds, {} won, {} lost, {} tied",
            self.stats.rounds,
            self.stats.wins,
            self.stats.losses,
            self.stats.ties
        );
        Ok(self.stats)
    }

    /// Shuffles the deck and plays one round.
    ///
    /// Returns `None` if input closed before the round finished.
    ///
    /// # Errors
    ///
    /// Returns an error if console i/o fails or a round step fails.
    pub fn play_round(&mut self) -> Result<Option<RoundResult>, SessionError> {
        self.deck.shuffle(&mut self.rng);
        let mut round = Round::new(&self.deck, self.options);

        let open = round.open_dealer()?;
        self.console.say(&console::dealer_line(&open))?;

        let [first, second] = round.deal_player()?;
        self.console.say(&console::opening_line(&first, &second))?;

        while round.state() == RoundState::PlayerDecision {
            let Some(token) = self.console.prompt(console::ACTION_PROMPT)? else {
                log::debug!("input closed mid-round");
                return Ok(None);
            };

            match Action::parse(&token) {
                Some(Action::Hit) => {
                    let reveal = round.hit()?;
                    self.console.say(&console::hit_line(&reveal))?;
                }
                Some(Action::Stand) => round.stand()?,
                None => self.console.say("Please answer h or s.")?,
            }
        }

        if round.state() == RoundState::DealerDraw {
            for reveal in round.dealer_play()? {
                self.console.say(&console::dealer_line(&reveal))?;
            }
        }

        let result = match round.result() {
            Some(result) => result,
            None => round.resolve()?,
        };
        self.console.say(&console::outcome_line(&result))?;
        self.stats.record(&result);

        Ok(Some(result))
    }

    /// Returns the tally so far.
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Returns the deck in its current order.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Consumes the session, returning the output handle.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }
}
