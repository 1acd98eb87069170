//! Table rules and configuration.

use crate::money::Money;

/// A payout multiplier expressed as a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayoutRatio {
    /// Numerator of the ratio.
    pub numerator: u16,
    /// Denominator of the ratio, never zero.
    pub denominator: u16,
}

impl PayoutRatio {
    /// Pays 3 to 2.
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };

    /// Pays 6 to 5.
    pub const SIX_TO_FIVE: Self = Self {
        numerator: 6,
        denominator: 5,
    };

    /// Creates a ratio, or returns `None` for a zero denominator.
    #[must_use]
    pub const fn new(numerator: u16, denominator: u16) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Some(Self {
            numerator,
            denominator,
        })
    }

    /// Returns the winnings on `bet`, not including the returned stake.
    #[must_use]
    pub fn winnings(&self, bet: Money) -> Money {
        bet.scale(u64::from(self.numerator), u64::from(self.denominator))
    }
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_table::{GameOptions, Money};
///
/// let options = GameOptions::default()
///     .with_starting_wallet(Money::from_dollars(500))
///     .with_dealer_stands_on(17);
/// assert_eq!(options.max_players, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Money each player sits down with.
    pub starting_wallet: Money,
    /// Largest number of players at the table.
    pub max_players: usize,
    /// Lowest total the dealer stands on, soft totals included.
    pub dealer_stands_on: u8,
    /// Blackjack payout ratio.
    pub blackjack_pays: PayoutRatio,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_wallet: Money::from_dollars(1000),
            max_players: 5,
            dealer_stands_on: 17,
            blackjack_pays: PayoutRatio::THREE_TO_TWO,
        }
    }
}

impl GameOptions {
    /// Sets the money each player starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{GameOptions, Money};
    ///
    /// let options = GameOptions::default().with_starting_wallet(Money::from_dollars(250));
    /// assert_eq!(options.starting_wallet, Money::from_dollars(250));
    /// ```
    #[must_use]
    pub const fn with_starting_wallet(mut self, wallet: Money) -> Self {
        self.starting_wallet = wallet;
        self
    }

    /// Sets the maximum number of players.
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert!(options.dealer_must_hit(17));
    /// assert!(!options.dealer_must_hit(18));
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the blackjack payout ratio.
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: PayoutRatio) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Returns whether the dealer has to draw on `total`.
    #[must_use]
    pub const fn dealer_must_hit(&self, total: u8) -> bool {
        total < self.dealer_stands_on
    }

    /// Returns whether `count` players can be seated.
    #[must_use]
    pub const fn seats(&self, count: usize) -> bool {
        count >= 1 && count <= self.max_players
    }
}
