//! Round result types.

/// Outcome of a round, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins.
    Win,
    /// Dealer wins.
    Lose,
    /// Equal totals.
    Tie,
}

/// How the round came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finish {
    /// Player reached exactly the target total.
    TwentyOne,
    /// Player went over the target total.
    PlayerBust,
    /// Dealer went over the target total.
    DealerBust,
    /// Both hands stood and totals were compared.
    Showdown,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome for the player.
    pub outcome: Outcome,
    /// How the round ended.
    pub finish: Finish,
    /// The player's final total.
    pub player_points: u8,
    /// The dealer's final total.
    pub dealer_points: u8,
}
