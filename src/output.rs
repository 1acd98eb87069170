//! Table events and the text renderer.

use std::io::Write;

use tracing::warn;

use crate::card::Card;
use crate::hand::Hand;
use crate::input::Prompt;
use crate::money::Money;
use crate::result::{HandOutcome, PlayerResult};

/// Something that happened at the table.
///
/// Seat indices are zero-based; renderers number players from one.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// Players sat down.
    Seated {
        /// Number of players.
        players: usize,
        /// Money each player starts with.
        wallet: Money,
    },
    /// A decision is being requested.
    Prompt(&'a Prompt),
    /// The reply to a prompt was not understood.
    InvalidInput(&'a Prompt),
    /// A player is about to act.
    Turn {
        /// Seat index of the player.
        player: usize,
        /// The dealer card on show.
        dealer_card: Option<Card>,
        /// The player's hand.
        hand: &'a Hand,
    },
    /// A player went over 21.
    Bust {
        /// Seat index of the player.
        player: usize,
        /// The busted hand.
        hand: &'a Hand,
    },
    /// The dealer was dealt a natural.
    DealerBlackjack {
        /// The dealer's hand.
        hand: &'a Hand,
    },
    /// The dealer finished drawing.
    DealerHand {
        /// The dealer's hand.
        hand: &'a Hand,
    },
    /// A player's round was settled.
    Settled {
        /// The settlement.
        result: &'a PlayerResult,
        /// The player's final hand.
        hand: &'a Hand,
    },
    /// End-of-round wallet report.
    Wallet {
        /// Seat index of the player.
        player: usize,
        /// Wallet after settlement.
        wallet: Money,
    },
    /// The session is over.
    Farewell,
}

/// Receives table events.
pub trait Output {
    /// Handles one event.
    fn emit(&mut self, event: &Event<'_>);
}

/// Renders events as plain text.
#[derive(Debug)]
pub struct TextOutput<W> {
    writer: W,
}

impl<W: Write> TextOutput<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn hand(&mut self, title: &str, hand: &Hand, total_label: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{title}")?;
        for card in hand.cards() {
            writeln!(self.writer, "{card}")?;
        }
        writeln!(self.writer, "{total_label}: {}", hand.value())?;
        writeln!(self.writer)
    }

    fn render(&mut self, event: &Event<'_>) -> std::io::Result<()> {
        match *event {
            Event::Seated { players, wallet } => writeln!(
                self.writer,
                "{players} player(s) have been added with {wallet} in the wallet each. Let's start the game!"
            ),
            Event::Prompt(prompt) => match *prompt {
                Prompt::PlayerCount { max } => {
                    writeln!(self.writer, "How many players (1-{max})?")
                }
                Prompt::Bid { player, wallet } => {
                    writeln!(self.writer)?;
                    writeln!(self.writer, "Getting bid for player #{}", player + 1)?;
                    writeln!(
                        self.writer,
                        "Your wallet: {wallet}. How much would you like to bet?"
                    )
                }
                Prompt::Action { .. } => {
                    writeln!(self.writer, "Do you want to hit 'h' or stand 's'?")
                }
                Prompt::Continue => {
                    writeln!(self.writer)?;
                    writeln!(self.writer, "Do you want to start a new round? 'y' or 'n'")
                }
            },
            Event::InvalidInput(prompt) => match *prompt {
                Prompt::PlayerCount { max } => writeln!(
                    self.writer,
                    "Invalid number; please select between 1 and {max} players"
                ),
                Prompt::Bid { .. } => {
                    writeln!(self.writer, "Invalid bet; please input a new value")
                }
                Prompt::Action { .. } => writeln!(
                    self.writer,
                    "Invalid option; please type H to hit or S to stand"
                ),
                Prompt::Continue => writeln!(
                    self.writer,
                    "Invalid option; please type Y to continue or N to exit"
                ),
            },
            Event::Turn {
                player,
                dealer_card,
                hand,
            } => {
                writeln!(self.writer)?;
                writeln!(self.writer, "Player #{}", player + 1)?;
                writeln!(self.writer)?;
                writeln!(self.writer, "Dealer hand:")?;
                match dealer_card {
                    Some(card) => writeln!(self.writer, "{card}")?,
                    None => writeln!(self.writer, "??")?,
                }
                writeln!(self.writer)?;
                writeln!(self.writer, "Your hand:")?;
                for card in hand.cards() {
                    writeln!(self.writer, "{card}")?;
                }
                writeln!(self.writer)
            }
            Event::Bust { player, hand } => {
                writeln!(self.writer, "Player #{} is over 21!", player + 1)?;
                self.hand(&format!("Player #{} hand:", player + 1), hand, "Total score")
            }
            Event::DealerBlackjack { hand } => {
                writeln!(self.writer, "Dealer has a Blackjack!")?;
                self.hand("Dealer hand:", hand, "Dealer total score")
            }
            Event::DealerHand { hand } => {
                self.hand("Dealer hand:", hand, "Dealer total score")
            }
            Event::Settled { result, hand } => {
                let seat = result.player + 1;
                self.hand(&format!("Player #{seat} hand:"), hand, "Total score")?;
                match result.outcome {
                    HandOutcome::Blackjack => {
                        writeln!(self.writer, "Player #{seat} has a Blackjack!")?;
                        writeln!(self.writer, "Player #{seat} wins!")?;
                        self.winnings(result)
                    }
                    HandOutcome::Win => {
                        writeln!(self.writer, "Player #{seat} wins!")?;
                        self.winnings(result)
                    }
                    HandOutcome::Lose => {
                        writeln!(self.writer, "Dealer defeats player #{seat}!")
                    }
                    HandOutcome::Push => {
                        if result.player_blackjack {
                            writeln!(self.writer, "Player #{seat} has a Blackjack!")?;
                        }
                        writeln!(self.writer, "It's a push...")?;
                        writeln!(
                            self.writer,
                            "Player #{seat} won back {} this round",
                            result.bet
                        )
                    }
                }
            }
            Event::Wallet { player, wallet } => {
                writeln!(self.writer, "Player #{} wallet: {wallet}", player + 1)
            }
            Event::Farewell => writeln!(self.writer, "Thanks for playing!"),
        }
    }

    fn winnings(&mut self, result: &PlayerResult) -> std::io::Result<()> {
        let profit = result.payout.checked_sub(result.bet).unwrap_or_default();
        writeln!(
            self.writer,
            "Player #{} won {profit} this round",
            result.player + 1
        )
    }
}

impl<W: Write> Output for TextOutput<W> {
    fn emit(&mut self, event: &Event<'_>) {
        let rendered = self.render(event).and_then(|()| self.writer.flush());
        if let Err(err) = rendered {
            warn!(%err, "failed to write table output");
        }
    }
}
