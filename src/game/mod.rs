//! Game engine and round state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DeckError};
use crate::hand::Hand;
use crate::options::{GameOptions, MIN_CARDS_PER_ROUND};
use crate::participant::Participant;

mod actions;
mod dealer;
mod round;
pub mod state;

pub use state::GameState;

/// A single-player blackjack table.
///
/// The game owns the deck, the player and the dealer, and walks one round at
/// a time through [`GameState`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to draw this round.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    state: GameState,
    player: Participant,
    dealer: Participant,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);

        Self {
            deck,
            options,
            state: GameState::WaitingForRound,
            player: Participant::player(),
            dealer: Participant::dealer(),
            rng,
        }
    }

    /// Prepares a new round: shuffles a fresh deck when needed and empties both hands.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn start_round(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::WaitingForRound {
            return Err(ActionError::InvalidState);
        }

        if self.options.reshuffle_each_round || self.deck.len() < MIN_CARDS_PER_ROUND {
            self.deck = Deck::new(&mut self.rng);
        }

        self.player.reset_hand();
        self.dealer.reset_hand();
        self.set_state(GameState::Dealing);
        Ok(())
    }

    /// Deals two cards to the player, then two to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealing state or the deck runs
    /// out. Running out abandons the round.
    pub fn deal(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::Dealing {
            return Err(ActionError::InvalidState);
        }

        if let Err(err) = self.deal_initial() {
            return Err(self.abandon_round(err));
        }

        debug!(
            target: "game.round",
            player = self.player.hand().value(),
            dealer = self.dealer.hand().value(),
            "initial cards dealt"
        );
        self.set_state(GameState::PlayerTurn);
        Ok(())
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        self.player.hand()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        self.dealer.hand()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    fn deal_initial(&mut self) -> Result<(), DeckError> {
        self.player.draw_from(&mut self.deck)?;
        self.player.draw_from(&mut self.deck)?;
        self.dealer.draw_from(&mut self.deck)?;
        self.dealer.draw_from(&mut self.deck)?;
        Ok(())
    }

    fn draw_for_player(&mut self) -> Result<Card, DeckError> {
        self.player.draw_from(&mut self.deck)
    }

    /// Ends the current round after the deck ran out so a new one can start.
    fn abandon_round(&mut self, err: DeckError) -> ActionError {
        warn!(target: "game.round", state = ?self.state, %err, "round abandoned");
        self.set_state(GameState::WaitingForRound);
        err.into()
    }

    fn set_state(&mut self, state: GameState) {
        debug!(target: "game.state", from = ?self.state, to = ?state, "state change");
        self.state = state;
    }
}
