//! Seated players.

use crate::error::BetError;
use crate::hand::Hand;
use crate::money::Money;

/// A player seated at the table.
#[derive(Debug, Clone)]
pub struct Player {
    /// Cards held this round.
    pub hand: Hand,
    wallet: Money,
    bet: Money,
}

impl Player {
    /// Creates a player holding `wallet`.
    #[must_use]
    pub const fn new(wallet: Money) -> Self {
        Self {
            hand: Hand::new(),
            wallet,
            bet: Money::ZERO,
        }
    }

    /// Returns the money the player has not staked.
    #[must_use]
    pub const fn wallet(&self) -> Money {
        self.wallet
    }

    /// Returns the stake for the current round, zero between rounds.
    #[must_use]
    pub const fn bet(&self) -> Money {
        self.bet
    }

    /// Stakes `amount`, taking it out of the wallet immediately.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::ZeroBet`] for a zero amount and
    /// [`BetError::InsufficientFunds`] when the wallet cannot cover it.
    pub fn place_bet(&mut self, amount: Money) -> Result<(), BetError> {
        if amount.is_zero() {
            return Err(BetError::ZeroBet);
        }

        self.wallet = self
            .wallet
            .checked_sub(amount)
            .ok_or(BetError::InsufficientFunds)?;
        self.bet = amount;

        Ok(())
    }

    /// Credits `earnings` to the wallet.
    pub fn balance(&mut self, earnings: Money) {
        self.wallet += earnings;
    }

    /// Forgets the settled stake.
    pub(crate) const fn clear_bet(&mut self) {
        self.bet = Money::ZERO;
    }
}
