use alloc::vec::Vec;

use tracing::{info, instrument};

use crate::card::Card;
use crate::error::ActionError;
use crate::participant::Decision;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the fixed threshold.
    ///
    /// The dealer draws while below 17 and stands on 17 or higher, soft or
    /// hard. Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw. An empty deck abandons the round.
    #[instrument(level = "debug", target = "game.dealer", skip(self))]
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != GameState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        while self.dealer.decide() == Some(Decision::Hit) {
            let card = match self.dealer.draw_from(&mut self.deck) {
                Ok(card) => card,
                Err(err) => return Err(self.abandon_round(err)),
            };
            drawn_cards.push(card);
        }

        self.set_state(GameState::RoundOver);
        Ok(drawn_cards)
    }

    /// Compares the final hands and closes the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&mut self) -> Result<RoundResult, ActionError> {
        if self.state != GameState::RoundOver {
            return Err(ActionError::InvalidState);
        }

        let player_value = self.player.hand().value();
        let dealer_value = self.dealer.hand().value();
        let outcome = Outcome::resolve(player_value, dealer_value);
        info!(target: "game.round", player_value, dealer_value, ?outcome, "round resolved");

        self.set_state(GameState::WaitingForRound);

        Ok(RoundResult {
            player_hand: self.player.hand().clone(),
            dealer_hand: self.dealer.hand().clone(),
            player_value,
            dealer_value,
            outcome,
        })
    }
}
