//! Round participants and their turn policies.

use core::str::FromStr;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, ParseDecisionError};
use crate::hand::Hand;

/// Total at which the dealer stops drawing.
pub const DEALER_STANDS_ON: u32 = 17;

/// A single turn decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw one more card.
    Hit,
    /// End the turn.
    Stand,
}

impl FromStr for Decision {
    type Err = ParseDecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "h" => Ok(Self::Hit),
            "s" => Ok(Self::Stand),
            _ => Err(ParseDecisionError),
        }
    }
}

/// How a participant makes turn decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Decisions come from outside (the user at the console).
    Interactive,
    /// Hit while the total is below `stand_on`, stand otherwise.
    Threshold {
        /// Lowest total at which the participant stands.
        stand_on: u32,
    },
}

impl Strategy {
    /// Returns the decision for `hand`, or `None` if it must be supplied externally.
    #[must_use]
    pub fn decide(&self, hand: &Hand) -> Option<Decision> {
        match *self {
            Self::Interactive => None,
            Self::Threshold { stand_on } => Some(if hand.value() < stand_on {
                Decision::Hit
            } else {
                Decision::Stand
            }),
        }
    }
}

/// A seat at the table: one hand plus the policy that plays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    hand: Hand,
    strategy: Strategy,
}

impl Participant {
    /// Creates a participant with an empty hand.
    #[must_use]
    pub const fn new(strategy: Strategy) -> Self {
        Self {
            hand: Hand::new(),
            strategy,
        }
    }

    /// The interactive player.
    #[must_use]
    pub const fn player() -> Self {
        Self::new(Strategy::Interactive)
    }

    /// The dealer, standing on [`DEALER_STANDS_ON`].
    #[must_use]
    pub const fn dealer() -> Self {
        Self::new(Strategy::Threshold {
            stand_on: DEALER_STANDS_ON,
        })
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the participant's strategy.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Replaces the hand with a new empty one.
    pub fn reset_hand(&mut self) {
        self.hand = Hand::new();
    }

    /// Draws one card from `deck` into the hand and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn draw_from(&mut self, deck: &mut Deck) -> Result<Card, DeckError> {
        let card = deck.draw()?;
        self.hand.add_card(card);
        Ok(card)
    }

    /// Asks the strategy what to do with the current hand.
    #[must_use]
    pub fn decide(&self) -> Option<Decision> {
        self.strategy.decide(&self.hand)
    }
}
