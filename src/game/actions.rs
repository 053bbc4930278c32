use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round immediately; the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// is empty. An empty deck abandons the round.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = match self.draw_for_player() {
            Ok(card) => card,
            Err(err) => return Err(self.abandon_round(err)),
        };
        let value = self.player.hand().value();
        debug!(target: "game.player", %card, value, "player hits");

        if self.player.hand().is_bust() {
            self.set_state(GameState::RoundOver);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(target: "game.player", value = self.player.hand().value(), "player stands");
        self.set_state(GameState::DealerTurn);
        Ok(())
    }
}
