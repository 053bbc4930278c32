//! Game configuration options.

/// Cards a carried-over deck must hold to start another round.
pub const MIN_CARDS_PER_ROUND: usize = 20;

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcli::GameOptions;
///
/// let options = GameOptions::default().with_reshuffle_each_round(false);
/// assert!(!options.reshuffle_each_round);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether every round starts from a freshly shuffled deck.
    ///
    /// When `false` the deck carries over between rounds and is only rebuilt
    /// once fewer than [`MIN_CARDS_PER_ROUND`] cards remain.
    pub reshuffle_each_round: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            reshuffle_each_round: true,
        }
    }
}

impl GameOptions {
    /// Sets whether each round gets a fresh deck.
    #[must_use]
    pub const fn with_reshuffle_each_round(mut self, reshuffle: bool) -> Self {
        self.reshuffle_each_round = reshuffle;
        self
    }
}
