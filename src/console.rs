//! Console input tokens and narration.

use std::io::{self, BufRead, Write};

use crate::game::Reveal;
use crate::result::{Finish, Outcome, RoundResult};

/// Player decision during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Take one more card.
    Hit,
    /// Stop taking cards.
    Stand,
}

impl Action {
    /// Parses a trimmed, lowercased token.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "h" | "hit" => Some(Self::Hit),
            "s" | "stand" => Some(Self::Stand),
            _ => None,
        }
    }
}

/// Answer to the play-again question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Play another round.
    Yes,
    /// End the session.
    No,
}

impl Reply {
    /// Parses a trimmed, lowercased token. Anything but an affirmative is
    /// [`Reply::No`].
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "y" | "yes" => Self::Yes,
            _ => Self::No,
        }
    }
}

/// Text prompt asking the player to hit or stand.
pub const ACTION_PROMPT: &str = "Hit or Stand? [h]/[s]: ";
/// Text prompt asking whether to play another round.
pub const REPLAY_PROMPT: &str = "\nPlay again? [y]/[n]: ";

/// Line announcing a card revealed to the dealer.
#[must_use]
pub fn dealer_line(reveal: &Reveal) -> String {
    format!("Dealer got {} - Table Points: {}", reveal.card, reveal.points)
}

/// Line announcing the player's opening cards.
#[must_use]
pub fn opening_line(first: &Reveal, second: &Reveal) -> String {
    format!(
        "You have {} and {} - Total Points: {}",
        first.card, second.card, second.points
    )
}

/// Line announcing a card the player hit for.
#[must_use]
pub fn hit_line(reveal: &Reveal) -> String {
    format!("You got {} - Total Points: {}", reveal.card, reveal.points)
}

/// Final message for a round.
#[must_use]
pub fn outcome_line(result: &RoundResult) -> String {
    match (result.outcome, result.finish) {
        (_, Finish::TwentyOne) => {
            format!("*** WINNER!!! You have {}! ***", result.player_points)
        }
        (Outcome::Win, _) => "*** You win!!! ***".to_string(),
        (Outcome::Tie, _) => "It's a tie!".to_string(),
        (Outcome::Lose, _) => "* Table wins! You lose... *".to_string(),
    }
}

/// Line-oriented console over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output handle.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of narration.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Prints `prompt` and reads the next non-blank token.
    ///
    /// The token is trimmed and lowercased. Returns `None` once input is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be written or input cannot be
    /// read.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let token = line.trim();
            if !token.is_empty() {
                return Ok(Some(token.to_lowercase()));
            }
        }
    }

    /// Consumes the console, returning the output handle.
    pub fn into_output(self) -> W {
        self.output
    }
}
