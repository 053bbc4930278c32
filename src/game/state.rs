//! Game state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round in progress.
    WaitingForRound,
    /// Deck and hands are ready; initial cards not yet dealt.
    Dealing,
    /// Waiting for player decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and can be resolved.
    RoundOver,
}
