//! Round result types for showdown.

use crate::hand::{BLACKJACK, Hand};

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player has the higher total.
    PlayerWins,
    /// Dealer has the higher total.
    DealerWins,
    /// Equal totals, neither busted.
    Tie,
    /// Player went over 21; dealer wins regardless of its total.
    PlayerBust,
    /// Dealer went over 21; player wins.
    DealerBust,
}

impl Outcome {
    /// Resolves a round from the two final totals.
    ///
    /// A player bust is checked first, so it loses even if the dealer also busted.
    #[must_use]
    pub const fn resolve(player_value: u32, dealer_value: u32) -> Self {
        if player_value > BLACKJACK {
            Self::PlayerBust
        } else if dealer_value > BLACKJACK {
            Self::DealerBust
        } else if player_value > dealer_value {
            Self::PlayerWins
        } else if player_value < dealer_value {
            Self::DealerWins
        } else {
            Self::Tie
        }
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::PlayerWins | Self::DealerBust)
    }

    /// Returns the line announcing this outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerWins => "You win!",
            Self::DealerWins => "Dealer wins!",
            Self::Tie => "It's a tie!",
            Self::PlayerBust => "You busted! Dealer wins!",
            Self::DealerBust => "Dealer busted! You win!",
        }
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's final hand.
    pub player_hand: Hand,
    /// The dealer's final hand.
    pub dealer_hand: Hand,
    /// The player's final total.
    pub player_value: u32,
    /// The dealer's final total.
    pub dealer_value: u32,
    /// The outcome of the round.
    pub outcome: Outcome,
}
