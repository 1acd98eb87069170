//! End-to-end sessions driven by scripted input.

mod common;

use std::collections::VecDeque;
use std::io::Cursor;

use blackjack_table::input::{self, Action, Input, LineInput, Prompt};
use blackjack_table::output::{Event, Output, TextOutput};
use blackjack_table::{GameError, GameOptions, InputError, Money, SeatError, Suit, session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use common::{card, stacked};

/// Replays canned replies and records which prompts were asked.
#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<String>,
    asked: Vec<Prompt>,
}

impl Script {
    fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|reply| format!("{reply}\n")).collect(),
            asked: Vec::new(),
        }
    }

    fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Input for Script {
    fn read_line(&mut self, prompt: &Prompt) -> Result<String, InputError> {
        self.asked.push(*prompt);
        self.replies.pop_front().ok_or(InputError::Closed)
    }
}

/// Keeps a one-line summary of every event other than prompts.
#[derive(Debug, Default)]
struct Recorder {
    events: Vec<String>,
}

impl Output for Recorder {
    fn emit(&mut self, event: &Event<'_>) {
        let line = match *event {
            Event::Seated { players, wallet } => format!("seated {players} {wallet}"),
            Event::Prompt(_) => return,
            Event::InvalidInput(prompt) => format!("invalid {prompt:?}"),
            Event::Turn { player, hand, .. } => format!("turn {player}: {hand}"),
            Event::Bust { player, hand } => format!("bust {player}: {hand}"),
            Event::DealerBlackjack { hand } => format!("dealer blackjack: {hand}"),
            Event::DealerHand { hand } => format!("dealer: {hand}"),
            Event::Settled { result, .. } => format!(
                "settled {} {:?} {}",
                result.player, result.outcome, result.payout
            ),
            Event::Wallet { player, wallet } => format!("wallet {player} {wallet}"),
            Event::Farewell => "farewell".to_string(),
        };
        self.events.push(line);
    }
}

#[test]
fn two_rounds_with_scripted_players() {
    let deck = stacked(&[
        // Round 1
        card(Suit::Hearts, 10),  // player 0
        card(Suit::Spades, 6),   // player 0
        card(Suit::Clubs, 1),    // player 1
        card(Suit::Diamonds, 13), // player 1
        card(Suit::Hearts, 9),   // dealer
        card(Suit::Clubs, 7),    // dealer
        card(Suit::Diamonds, 5), // player 0 hit
        card(Suit::Spades, 2),   // dealer draw
        // Round 2
        card(Suit::Spades, 10),  // player 0
        card(Suit::Clubs, 9),    // player 0
        card(Suit::Hearts, 8),   // player 1
        card(Suit::Clubs, 4),    // player 1
        card(Suit::Hearts, 12),  // dealer
        card(Suit::Diamonds, 9), // dealer
        card(Suit::Clubs, 13),   // player 1 hit
        // Left over
        card(Suit::Spades, 3),
    ]);

    let mut script = Script::new(&[
        "2",     // players
        "abc",   // player 0 bid, rejected
        "100",   // player 0 bid
        "50",    // player 1 bid
        "x",     // player 0 action, rejected
        "h",     // player 0 hits to 21
        "s",     // player 0 stands
        "maybe", // continue, rejected
        "Y",     // continue
        "2000",  // player 0 bid, over the wallet
        "200",   // player 0 bid
        "75",    // player 1 bid
        "STAND", // player 0
        "Hit",   // player 1 busts
        "no",    // stop
    ]);
    let mut recorder = Recorder::default();

    let game = session::run_with_deck(
        GameOptions::default(),
        None,
        deck,
        &mut script,
        &mut recorder,
    )
    .unwrap();

    assert_eq!(script.remaining(), 0);
    assert_eq!(
        recorder.events,
        vec![
            "seated 2 $1000.00".to_string(),
            format!(
                "invalid {:?}",
                Prompt::Bid {
                    player: 0,
                    wallet: Money::from_dollars(1000)
                }
            ),
            "turn 0: 10/Hearts 6/Spades".to_string(),
            format!("invalid {:?}", Prompt::Action { player: 0 }),
            "turn 0: 10/Hearts 6/Spades 5/Diamonds".to_string(),
            "dealer: 9/Hearts 7/Clubs 2/Spades".to_string(),
            "settled 0 Win $200.00".to_string(),
            "settled 1 Blackjack $125.00".to_string(),
            "wallet 0 $1100.00".to_string(),
            "wallet 1 $1075.00".to_string(),
            format!("invalid {:?}", Prompt::Continue),
            format!(
                "invalid {:?}",
                Prompt::Bid {
                    player: 0,
                    wallet: Money::from_dollars(1100)
                }
            ),
            "turn 0: 10/Spades 9/Clubs".to_string(),
            "turn 1: 8/Hearts 4/Clubs".to_string(),
            "bust 1: 8/Hearts 4/Clubs K/Clubs".to_string(),
            "dealer: Q/Hearts 9/Diamonds".to_string(),
            "settled 0 Push $200.00".to_string(),
            "settled 1 Lose $0.00".to_string(),
            "wallet 0 $1100.00".to_string(),
            "wallet 1 $1000.00".to_string(),
            "farewell".to_string(),
        ]
    );

    assert_eq!(game.rounds(), 2);
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.player(0).unwrap().wallet(), Money::from_dollars(1100));
    assert_eq!(game.player(1).unwrap().wallet(), Money::from_dollars(1000));
    assert_eq!(
        game.player(1).unwrap().hand.to_string(),
        "8/Hearts 4/Clubs K/Clubs"
    );
}

#[test]
fn dealer_natural_asks_for_no_actions() {
    let deck = stacked(&[
        card(Suit::Hearts, 10),
        card(Suit::Spades, 6),
        card(Suit::Clubs, 1),
        card(Suit::Diamonds, 13),
    ]);
    let mut script = Script::new(&["100", "n"]);
    let mut recorder = Recorder::default();

    let game = session::run_with_deck(
        GameOptions::default(),
        Some(1),
        deck,
        &mut script,
        &mut recorder,
    )
    .unwrap();

    assert!(
        !script
            .asked
            .iter()
            .any(|prompt| matches!(prompt, Prompt::Action { .. }))
    );
    assert_eq!(
        recorder.events,
        vec![
            "seated 1 $1000.00",
            "dealer blackjack: A/Clubs K/Diamonds",
            "settled 0 Lose $0.00",
            "wallet 0 $900.00",
            "farewell",
        ]
    );
    assert_eq!(game.player(0).unwrap().wallet(), Money::from_dollars(900));
}

#[test]
fn closed_input_aborts_the_session() {
    let mut script = Script::new(&["1", "10"]);
    let mut recorder = Recorder::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let err = session::run(
        GameOptions::default(),
        None,
        &mut rng,
        &mut script,
        &mut recorder,
    )
    .unwrap_err();

    assert!(matches!(err, GameError::Input(InputError::Closed)));
}

#[test]
fn exhausted_deck_aborts_the_session() {
    let deck = stacked(&[
        card(Suit::Hearts, 10),
        card(Suit::Spades, 6),
        card(Suit::Clubs, 9),
        card(Suit::Diamonds, 7),
    ]);
    let mut script = Script::new(&["100", "h"]);
    let mut recorder = Recorder::default();

    let err = session::run_with_deck(
        GameOptions::default(),
        Some(1),
        deck,
        &mut script,
        &mut recorder,
    )
    .unwrap_err();

    assert!(err.is_deck_empty());
}

#[test]
fn invalid_table_size_is_rejected() {
    let mut script = Script::new(&[]);
    let err = session::run_with_deck(
        GameOptions::default(),
        Some(6),
        stacked(&[]),
        &mut script,
        &mut Recorder::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        GameError::Seat(SeatError {
            requested: 6,
            max: 5
        })
    ));
}

#[test]
fn player_count_is_asked_until_valid() {
    let deck = stacked(&[
        card(Suit::Hearts, 10),
        card(Suit::Spades, 9),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 8),
    ]);
    let mut script = Script::new(&["0", "six", "6", "1", "10", "s", "n"]);
    let mut recorder = Recorder::default();

    let game = session::run_with_deck(
        GameOptions::default(),
        None,
        deck,
        &mut script,
        &mut recorder,
    )
    .unwrap();

    let count_prompts = script
        .asked
        .iter()
        .filter(|prompt| matches!(prompt, Prompt::PlayerCount { max: 5 }))
        .count();
    assert_eq!(count_prompts, 4);
    assert_eq!(game.player_count(), 1);
    assert_eq!(game.player(0).unwrap().wallet(), Money::from_dollars(1010));
}

/// Always bets ten, always stands, and plays a fixed number of rounds.
struct Standing {
    rounds_left: usize,
}

impl Input for Standing {
    fn read_line(&mut self, prompt: &Prompt) -> Result<String, InputError> {
        let reply = match prompt {
            Prompt::PlayerCount { .. } => "3",
            Prompt::Bid { .. } => "10",
            Prompt::Action { .. } => "s",
            Prompt::Continue => {
                self.rounds_left -= 1;
                if self.rounds_left == 0 { "n" } else { "y" }
            }
        };
        Ok(reply.to_string())
    }
}

#[test]
fn same_seed_replays_the_same_session() {
    let play = |seed: u64| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut input = Standing { rounds_left: 2 };
        let mut output = TextOutput::new(Vec::new());
        let game = session::run(
            GameOptions::default(),
            None,
            &mut rng,
            &mut input,
            &mut output,
        )
        .unwrap();
        let wallets: Vec<Money> = game.players().iter().map(|p| p.wallet()).collect();
        (wallets, String::from_utf8(output.into_inner()).unwrap())
    };

    let first = play(2024);
    let second = play(2024);
    assert_eq!(first, second);
    assert_eq!(first.0.len(), 3);
    assert!(first.1.contains("Thanks for playing!"));
}

#[test]
fn line_input_reprompts_on_undecodable_bytes() {
    let mut reader = LineInput::new(Cursor::new(b"\xff\xfe\n3\n".to_vec()));
    let mut recorder = Recorder::default();

    let count = input::ask(
        &mut reader,
        &mut recorder,
        &Prompt::PlayerCount { max: 5 },
        |token| input::parse_player_count(token, 5),
    )
    .unwrap();

    assert_eq!(count, 3);
    assert_eq!(recorder.events, ["invalid PlayerCount { max: 5 }"]);
}

#[test]
fn line_input_reports_end_of_stream() {
    let mut reader = LineInput::new(Cursor::new(b"\xff\n".to_vec()));
    let prompt = Prompt::Continue;

    assert!(reader.read_line(&prompt).unwrap().starts_with('\u{fffd}'));
    assert!(matches!(reader.read_line(&prompt), Err(InputError::Closed)));
}

#[test]
fn garbled_line_does_not_abort_the_session() {
    let deck = stacked(&[
        card(Suit::Hearts, 10),
        card(Suit::Spades, 9),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 8),
    ]);
    let mut reader = LineInput::new(Cursor::new(b"1\n\xc3\x28\n10\ns\nn\n".to_vec()));
    let mut recorder = Recorder::default();

    let game = session::run_with_deck(
        GameOptions::default(),
        None,
        deck,
        &mut reader,
        &mut recorder,
    )
    .unwrap();

    assert_eq!(game.player(0).unwrap().wallet(), Money::from_dollars(1010));
    assert!(
        recorder
            .events
            .iter()
            .any(|event| event.starts_with("invalid Bid"))
    );
}

#[test]
fn token_parsing() {
    assert_eq!(input::parse_action("h"), Some(Action::Hit));
    assert_eq!(input::parse_action("HIT"), Some(Action::Hit));
    assert_eq!(input::parse_action("S"), Some(Action::Stand));
    assert_eq!(input::parse_action("Stand"), Some(Action::Stand));
    assert_eq!(input::parse_action("double"), None);
    assert_eq!(input::parse_action(""), None);

    assert_eq!(input::parse_continue("y"), Some(true));
    assert_eq!(input::parse_continue("YES"), Some(true));
    assert_eq!(input::parse_continue("No"), Some(false));
    assert_eq!(input::parse_continue("later"), None);

    assert_eq!(input::parse_player_count("1", 5), Some(1));
    assert_eq!(input::parse_player_count("5", 5), Some(5));
    assert_eq!(input::parse_player_count("0", 5), None);
    assert_eq!(input::parse_player_count("6", 5), None);

    let wallet = Money::from_cents(1050);
    assert_eq!(input::parse_bid("10", wallet), Some(Money::from_dollars(10)));
    assert_eq!(input::parse_bid("11", wallet), None);
    assert_eq!(input::parse_bid("-5", wallet), None);
    assert_eq!(input::parse_bid("2.5", wallet), None);
}

#[test]
fn text_output_renders_the_table() {
    let deck = stacked(&[
        card(Suit::Hearts, 1),
        card(Suit::Spades, 13),
        card(Suit::Clubs, 9),
        card(Suit::Diamonds, 8),
    ]);
    let mut script = Script::new(&["25", "n"]);
    let mut output = TextOutput::new(Vec::new());

    session::run_with_deck(
        GameOptions::default(),
        Some(1),
        deck,
        &mut script,
        &mut output,
    )
    .unwrap();

    let text = String::from_utf8(output.into_inner()).unwrap();
    assert!(text.contains("Your wallet: $1000.00. How much would you like to bet?"));
    assert!(text.contains("Player #1 has a Blackjack!"));
    assert!(text.contains("Player #1 won $37.50 this round"));
    assert!(text.contains("Player #1 wallet: $1037.50"));
    assert!(text.contains("Dealer total score: 17"));
}
