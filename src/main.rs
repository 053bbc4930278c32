//! Console blackjack against the house.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjcli::{Console, Game, GameOptions};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    tracing::debug!(target: "session", seed, "starting session");

    let mut game = Game::new(GameOptions::default(), seed);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match console.run(&mut game) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(target: "session", error = %err, "session aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
