//! Game configuration options.

/// Configuration options for a game of twenty-one.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_win_points(21)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Target total; any hand above it is bust.
    pub win_points: u8,
    /// Dealer keeps drawing while below this total.
    pub dealer_stands_on: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            win_points: 21,
            dealer_stands_on: 17,
        }
    }
}

impl GameOptions {
    /// Sets the target total.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_win_points(21);
    /// assert_eq!(options.win_points, 21);
    /// ```
    #[must_use]
    pub const fn with_win_points(mut self, points: u8) -> Self {
        self.win_points = points;
        self
    }

    /// Sets the total at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, points: u8) -> Self {
        self.dealer_stands_on = points;
        self
    }
}
