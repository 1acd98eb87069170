//! Round result types for showdown.

use crate::money::Money;

/// How a player's hand fared against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins with a natural the dealer does not match.
    Blackjack,
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts or dealer has the higher total).
    Lose,
    /// Push (tie); the stake is returned.
    Push,
}

/// Result for a single player after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// Seat index of the player.
    pub player: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The stake for the round.
    pub bet: Money,
    /// Amount credited back to the wallet.
    pub payout: Money,
    /// The player's hand value.
    pub player_value: u8,
    /// Whether the player held a natural.
    pub player_blackjack: bool,
    /// Wallet after the payout.
    pub wallet: Money,
}

impl PlayerResult {
    /// Net result of the round (positive = profit, negative = loss), in cents.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "table stakes fit in i64")]
    pub const fn net_cents(&self) -> i64 {
        self.payout.cents() as i64 - self.bet.cents() as i64
    }
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}
