//! A single shuffled 52-card deck.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use tracing::{debug, warn};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards. The front of the deck is the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds all 52 cards and shuffles them with the given random source.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        shuffle(&mut cards, rng);
        debug!(target: "deck", cards = cards.len(), "deck shuffled");

        Self {
            cards: cards.into(),
        }
    }

    /// Creates a deck that deals `draws` in the given order.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        Self {
            cards: draws.iter().copied().collect(),
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let Some(card) = self.cards.pop_front() else {
            warn!(target: "deck", "draw from exhausted deck");
            return Err(DeckError::Exhausted);
        };
        debug!(target: "deck", %card, remaining = self.cards.len(), "card drawn");
        Ok(card)
    }

    /// Returns the remaining cards, top first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Fisher-Yates: position `i` takes a uniform pick from `i..n`.
fn shuffle<R: Rng>(cards: &mut [Card], rng: &mut R) {
    let n = cards.len();
    for i in 0..n {
        let j = rng.random_range(i..n);
        cards.swap(i, j);
    }
}
