//! Console transcript tests.

#![cfg(feature = "std")]

use std::io::Cursor;

use bjcli::{Card, Console, Deck, Decision, Game, GameOptions, Outcome, Rank, Suit};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// A game whose next rounds are dealt from `draws`, padded so the deck
/// is not rebuilt when a round starts.
fn stacked_game(draws: &[Card]) -> Game {
    let mut cards = draws.to_vec();
    cards.resize(30, card(Suit::Clubs, Rank::Ten));

    let options = GameOptions::default().with_reshuffle_each_round(false);
    let mut game = Game::new(options, 0);
    game.deck = Deck::stacked(&cards);
    game
}

fn run_session(game: &mut Game, input: &str) -> String {
    let mut console = Console::new(Cursor::new(input.as_bytes()), Vec::new());
    console.run(game).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn stand_round_transcript() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
    ]);

    let output = run_session(&mut game, "s\nn\n");
    assert_eq!(
        output,
        "Player's turn:\n\
         Your hand: Ten of Hearts, Nine of Spades (Total: 19)\n\
         Do you want to hit or stay? (h/s)\n\
         Dealer's turn:\n\
         Player's final hand: Ten of Hearts, Nine of Spades (Total: 19)\n\
         Dealer's final hand: Ten of Clubs, Seven of Diamonds (Total: 17)\n\
         You win!\n\
         Do you want to play again? (y/n)\n"
    );
}

#[test]
fn unrecognized_input_is_reprompted() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
    ]);

    let output = run_session(&mut game, "x\nhit\ns\nn\n");
    assert_eq!(output.matches("Please enter 'h' or 's'.").count(), 2);
    assert_eq!(output.matches("Do you want to hit or stay? (h/s)").count(), 3);
    assert!(output.contains("You win!"));
}

#[test]
fn invalid_utf8_input_is_reprompted() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
    ]);

    let input: &[u8] = b"\xff\xfe\ns\n\xff\n";
    let mut console = Console::new(Cursor::new(input), Vec::new());
    console.run(&mut game).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();

    assert_eq!(output.matches("Please enter 'h' or 's'.").count(), 1);
    assert!(output.contains("You win!"));
    assert_eq!(output.matches("Player's turn:").count(), 1);
}

#[test]
fn bust_ends_round_without_dealer_turn() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Six),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Spades, Rank::King),
    ]);

    let output = run_session(&mut game, "h\nn\n");
    assert!(output.contains("You drew King of Spades.\n"));
    assert!(output.contains("Your hand is over 21! You bust!\n"));
    assert!(output.contains("You busted! Dealer wins!\n"));
    assert!(!output.contains("Dealer's turn:"));
}

#[test]
fn dealer_draws_are_announced() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Three),
    ]);

    let output = run_session(&mut game, "s\nn\n");
    assert_eq!(output.matches("Dealer draws a card.").count(), 1);
    assert!(output.contains(
        "Dealer's final hand: Ten of Clubs, Five of Diamonds, Two of Hearts (Total: 17)"
    ));
    assert!(output.contains("You win!"));
}

#[test]
fn replay_accepts_uppercase_y() {
    let mut game = stacked_game(&[]);

    let output = run_session(&mut game, "s\nY\ns\nno\n");
    assert_eq!(output.matches("Player's turn:").count(), 2);
    assert_eq!(output.matches("Do you want to play again? (y/n)").count(), 2);
    assert_eq!(output.matches("It's a tie!").count(), 2);
}

#[test]
fn closed_input_ends_session_quietly() {
    let mut game = stacked_game(&[]);

    let output = run_session(&mut game, "");
    assert_eq!(output.matches("Do you want to hit or stay? (h/s)").count(), 1);
    assert!(!output.contains("Do you want to play again?"));

    let mut game = stacked_game(&[]);
    let output = run_session(&mut game, "s\n");
    assert!(output.contains("Do you want to play again? (y/n)"));
}

#[test]
fn play_round_returns_result() {
    let mut game = stacked_game(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::King),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Nine),
    ]);

    let mut console = Console::new(Cursor::new("s\n".as_bytes()), Vec::new());
    let result = console.play_round(&mut game).unwrap().unwrap();
    assert_eq!(result.player_value, 21);
    assert_eq!(result.dealer_value, 19);
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn replay_prompt_only_continues_on_y() {
    for (input, expected) in [
        ("y\n", true),
        ("Y\n", true),
        ("yes\n", false),
        ("n\n", false),
        ("", false),
    ] {
        let mut console = Console::new(Cursor::new(input.as_bytes()), Vec::new());
        assert_eq!(console.prompt_replay().unwrap(), expected, "input {input:?}");
    }
}

#[test]
fn decision_parsing_accepts_only_h_and_s() {
    assert_eq!("h".parse::<Decision>(), Ok(Decision::Hit));
    assert_eq!("s\n".parse::<Decision>(), Ok(Decision::Stand));
    assert!("hit".parse::<Decision>().is_err());
    assert!("H".parse::<Decision>().is_err());
    assert!("".parse::<Decision>().is_err());
}
