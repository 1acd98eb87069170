//! Interactive blackjack table on the terminal.

use std::io;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{Level, info};

use blackjack_table::input::LineInput;
use blackjack_table::output::TextOutput;
use blackjack_table::{GameOptions, Money, session};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players (1-5); asked for when omitted.
    #[arg(short, long)]
    players: Option<usize>,

    /// Seed for the deck shuffle; random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Dollars each player starts with.
    #[arg(
        short,
        long,
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..=Money::MAX_DOLLARS)
    )]
    wallet: u64,

    /// Log level written to stderr.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "shuffling with seed");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let options = GameOptions::default().with_starting_wallet(Money::from_dollars(args.wallet));
    let mut input = LineInput::new(io::stdin().lock());
    let mut output = TextOutput::new(io::stdout());

    session::run(options, args.players, &mut rng, &mut input, &mut output)
        .context("game aborted")?;

    Ok(())
}
