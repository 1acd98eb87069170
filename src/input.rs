//! Player input: prompts, token parsing and the re-prompt loop.
//!
//! The engine never reads text itself. Each decision is requested through an
//! [`Input`] and parsed into a typed value; anything unrecognised is reported
//! to the [`Output`] and asked again.

use std::io::BufRead;

use tracing::debug;

use crate::error::InputError;
use crate::money::Money;
use crate::output::{Event, Output};

/// A decision the table needs from a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// How many players sit down.
    PlayerCount {
        /// Largest table size allowed.
        max: usize,
    },
    /// How much a player stakes this round.
    Bid {
        /// Seat index of the player.
        player: usize,
        /// Money the player can stake.
        wallet: Money,
    },
    /// Whether a player hits or stands.
    Action {
        /// Seat index of the player.
        player: usize,
    },
    /// Whether another round is played.
    Continue,
}

/// A player's move during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// Source of raw input lines.
pub trait Input {
    /// Reads the reply to `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Closed`] at end of input and
    /// [`InputError::Io`] when reading fails.
    fn read_line(&mut self, prompt: &Prompt) -> Result<String, InputError>;
}

/// Reads replies line by line from a buffered reader such as stdin.
///
/// Lines that are not valid UTF-8 are still returned, lossily decoded.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    /// Wraps `reader`.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Input for LineInput<R> {
    fn read_line(&mut self, _prompt: &Prompt) -> Result<String, InputError> {
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Err(InputError::Closed);
        }
        // Undecodable bytes become U+FFFD so the parser rejects the line.
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}

/// Asks `prompt` until `parse` accepts the reply.
///
/// Rejected replies are reported as [`Event::InvalidInput`] and asked again,
/// with no retry limit.
///
/// # Errors
///
/// Returns the input's error if it can no longer supply lines.
pub fn ask<I, O, T, F>(
    input: &mut I,
    output: &mut O,
    prompt: &Prompt,
    parse: F,
) -> Result<T, InputError>
where
    I: Input + ?Sized,
    O: Output + ?Sized,
    F: Fn(&str) -> Option<T>,
{
    loop {
        output.emit(&Event::Prompt(prompt));
        let line = input.read_line(prompt)?;
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
        debug!(?prompt, reply = line.trim(), "rejected input");
        output.emit(&Event::InvalidInput(prompt));
    }
}

/// Parses a player count between 1 and `max`.
#[must_use]
pub fn parse_player_count(token: &str, max: usize) -> Option<usize> {
    token
        .parse::<usize>()
        .ok()
        .filter(|count| (1..=max).contains(count))
}

/// Parses a bid: a positive whole-dollar amount the wallet can cover.
///
/// # Example
///
/// ```
/// use blackjack_table::Money;
/// use blackjack_table::input::parse_bid;
///
/// let wallet = Money::from_dollars(50);
/// assert_eq!(parse_bid("20", wallet), Some(Money::from_dollars(20)));
/// assert_eq!(parse_bid("0", wallet), None);
/// assert_eq!(parse_bid("51", wallet), None);
/// assert_eq!(parse_bid("ten", wallet), None);
/// ```
#[must_use]
pub fn parse_bid(token: &str, wallet: Money) -> Option<Money> {
    token
        .parse::<u64>()
        .ok()
        .filter(|&dollars| dollars > 0 && dollars <= wallet.whole_dollars())
        .map(Money::from_dollars)
}

/// Parses a hit or stand token, ignoring case.
#[must_use]
pub fn parse_action(token: &str) -> Option<Action> {
    if ["h", "hit"].iter().any(|t| token.eq_ignore_ascii_case(t)) {
        Some(Action::Hit)
    } else if ["s", "stand"].iter().any(|t| token.eq_ignore_ascii_case(t)) {
        Some(Action::Stand)
    } else {
        None
    }
}

/// Parses a yes or no token, ignoring case.
#[must_use]
pub fn parse_continue(token: &str) -> Option<bool> {
    if ["y", "yes"].iter().any(|t| token.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if ["n", "no"].iter().any(|t| token.eq_ignore_ascii_case(t)) {
        Some(false)
    } else {
        None
    }
}
