use crate::error::ActionError;
use crate::hand::Hand;
use crate::participant::Decision;
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    /// Plays a whole round, asking `choose` for each player decision.
    ///
    /// With a seeded game this is a pure function of the seed and the
    /// decisions returned.
    ///
    /// ```
    /// use bjcli::{Decision, Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 3);
    /// let result = game.play_round(|_| Decision::Stand).unwrap();
    /// assert_eq!(result.player_hand.len(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the deck runs out.
    pub fn play_round<F>(&mut self, mut choose: F) -> Result<RoundResult, ActionError>
    where
        F: FnMut(&Hand) -> Decision,
    {
        self.start_round()?;
        self.deal()?;

        while self.state == GameState::PlayerTurn {
            match choose(self.player.hand()) {
                Decision::Hit => {
                    self.hit()?;
                }
                Decision::Stand => self.stand()?,
            }
        }

        if self.state == GameState::DealerTurn {
            self.dealer_play()?;
        }

        self.showdown()
    }
}
