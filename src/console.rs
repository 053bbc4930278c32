//! Line-based console front end.
//!
//! [`Console`] drives a [`Game`] over any reader/writer pair, so the same
//! code serves stdin/stdout and in-memory transcripts.

use std::io::{BufRead, Write};

use alloc::string::String;
use alloc::vec::Vec;
use tracing::{debug, warn};

use crate::error::ConsoleError;
use crate::game::{Game, GameState};
use crate::hand::Hand;
use crate::participant::Decision;
use crate::result::RoundResult;

const HIT_OR_STAY_PROMPT: &str = "Do you want to hit or stay? (h/s)";
const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? (y/n)";
const INVALID_DECISION: &str = "Please enter 'h' or 's'.";

/// Console session over an input and an output stream.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays rounds until the user declines to continue or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails or a round action fails.
    pub fn run(&mut self, game: &mut Game) -> Result<(), ConsoleError> {
        loop {
            if self.play_round(game)?.is_none() {
                debug!(target: "console", "input closed mid-round");
                return Ok(());
            }
            if !self.prompt_replay()? {
                return Ok(());
            }
        }
    }

    /// Plays one round interactively.
    ///
    /// Returns `None` if input ended before the player finished their turn.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails or a round action fails.
    pub fn play_round(&mut self, game: &mut Game) -> Result<Option<RoundResult>, ConsoleError> {
        game.start_round()?;
        game.deal()?;

        writeln!(self.output, "Player's turn:")?;
        while game.state() == GameState::PlayerTurn {
            self.show_hand("Your hand", game.player_hand())?;
            let Some(decision) = self.prompt_decision()? else {
                return Ok(None);
            };

            match decision {
                Decision::Hit => {
                    let card = game.hit()?;
                    writeln!(self.output, "You drew {card}.")?;
                    if game.player_hand().is_bust() {
                        writeln!(self.output, "Your hand is over 21! You bust!")?;
                    }
                }
                Decision::Stand => game.stand()?,
            }
        }

        if game.state() == GameState::DealerTurn {
            writeln!(self.output, "Dealer's turn:")?;
            for _ in game.dealer_play()? {
                writeln!(self.output, "Dealer draws a card.")?;
            }
        }

        let result = game.showdown()?;
        self.show_hand("Player's final hand", &result.player_hand)?;
        self.show_hand("Dealer's final hand", &result.dealer_hand)?;
        writeln!(self.output, "{}", result.outcome.message())?;

        Ok(Some(result))
    }

    /// Asks for hit or stand until a valid answer arrives.
    ///
    /// Returns `None` when input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn prompt_decision(&mut self) -> Result<Option<Decision>, ConsoleError> {
        loop {
            writeln!(self.output, "{HIT_OR_STAY_PROMPT}")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match line.parse::<Decision>() {
                Ok(decision) => return Ok(Some(decision)),
                Err(err) => {
                    warn!(target: "console", input = %line.trim(), %err, "unrecognized decision");
                    writeln!(self.output, "{INVALID_DECISION}")?;
                }
            }
        }
    }

    /// Asks whether to play another round. Only `y` (any case) continues.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn prompt_replay(&mut self) -> Result<bool, ConsoleError> {
        writeln!(self.output, "{PLAY_AGAIN_PROMPT}")?;
        Ok(self
            .read_line()?
            .is_some_and(|line| line.trim().eq_ignore_ascii_case("y")))
    }

    fn show_hand(&mut self, label: &str, hand: &Hand) -> Result<(), ConsoleError> {
        writeln!(self.output, "{label}: {hand} (Total: {})", hand.value())?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
