//! Monetary amounts.

use core::fmt;
use core::ops::{Add, AddAssign};

/// A non-negative amount of money, held in whole cents.
///
/// Bets are whole dollars, but a 3:2 blackjack on an odd bet pays half a
/// dollar, so wallets are tracked in cents. Arithmetic saturates at
/// [`u64::MAX`] cents instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

impl Money {
    /// No money.
    pub const ZERO: Self = Self(0);

    /// Largest starting wallet, in dollars, that the table accepts.
    ///
    /// Leaves room for decades of blackjack payouts before a wallet could
    /// approach the saturation point.
    pub const MAX_DOLLARS: u64 = 1_000_000_000_000;

    /// Creates an amount from whole dollars.
    #[must_use]
    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars.saturating_mul(100))
    }

    /// Creates an amount from whole dollars, or `None` above [`Self::MAX_DOLLARS`].
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::Money;
    ///
    /// assert_eq!(Money::checked_from_dollars(5), Some(Money::from_cents(500)));
    /// assert_eq!(Money::checked_from_dollars(u64::MAX), None);
    /// ```
    #[must_use]
    pub const fn checked_from_dollars(dollars: u64) -> Option<Self> {
        if dollars > Self::MAX_DOLLARS {
            None
        } else {
            Some(Self(dollars * 100))
        }
    }

    /// Creates an amount from cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Returns the whole dollars in the amount, dropping any cents.
    #[must_use]
    pub const fn whole_dollars(self) -> u64 {
        self.0 / 100
    }

    /// Returns whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtracts `other`, or returns `None` if that would go negative.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Multiplies the amount by `numerator / denominator`, rounding down to the cent.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    #[must_use]
    pub fn scale(self, numerator: u64, denominator: u64) -> Self {
        let cents = u128::from(self.0) * u128::from(numerator) / u128::from(denominator);
        Self(u64::try_from(cents).unwrap_or(u64::MAX))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}
