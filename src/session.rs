//! The top-level game loop.

use rand::Rng;
use tracing::info;

use crate::deck::Deck;
use crate::error::GameError;
use crate::game::Game;
use crate::input::{Input, Prompt, ask, parse_continue, parse_player_count};
use crate::options::GameOptions;
use crate::output::{Event, Output};

/// Runs a session from seating to the final "no".
///
/// When `players` is `None` the player count is asked for. A fresh deck is
/// shuffled once with `rng` and then played through round after round
/// without being reshuffled.
///
/// Returns the game as it stood when the players chose to stop.
///
/// # Errors
///
/// Returns an error if `players` is outside the table size, the deck runs
/// out, or the input fails.
pub fn run<R, I, O>(
    options: GameOptions,
    players: Option<usize>,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
) -> Result<Game, GameError>
where
    R: Rng + ?Sized,
    I: Input + ?Sized,
    O: Output + ?Sized,
{
    let mut deck = Deck::new();
    deck.shuffle(rng);
    run_with_deck(options, players, deck, input, output)
}

/// Runs a session over a deck that is dealt as given.
///
/// # Errors
///
/// Returns an error if `players` is outside the table size, the deck runs
/// out, or the input fails.
pub fn run_with_deck<I, O>(
    options: GameOptions,
    players: Option<usize>,
    deck: Deck,
    input: &mut I,
    output: &mut O,
) -> Result<Game, GameError>
where
    I: Input + ?Sized,
    O: Output + ?Sized,
{
    let count = match players {
        Some(count) => count,
        None => {
            let max = options.max_players;
            ask(input, output, &Prompt::PlayerCount { max }, |token| {
                parse_player_count(token, max)
            })?
        }
    };

    let mut game = Game::with_deck(options, count, deck)?;
    output.emit(&Event::Seated {
        players: count,
        wallet: game.options.starting_wallet,
    });

    loop {
        game.play_round(input, output)?;

        for (player, seat) in game.players().iter().enumerate() {
            output.emit(&Event::Wallet {
                player,
                wallet: seat.wallet(),
            });
        }

        if !ask(input, output, &Prompt::Continue, parse_continue)? {
            info!(rounds = game.rounds(), "session finished");
            output.emit(&Event::Farewell);
            return Ok(game);
        }
    }
}
