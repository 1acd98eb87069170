//! Payout resolution for a single seat.
//!
//! Every seat is settled on its own against the dealer's final hand.

use crate::hand::{BLACKJACK, Hand};
use crate::money::Money;
use crate::options::PayoutRatio;
use crate::result::HandOutcome;

/// The parts of a finished hand that decide a payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalHand {
    /// Hand total.
    pub value: u8,
    /// Whether the hand is a natural.
    pub blackjack: bool,
}

impl FinalHand {
    /// Creates a final hand from a total and natural flag.
    #[must_use]
    pub const fn new(value: u8, blackjack: bool) -> Self {
        Self { value, blackjack }
    }
}

impl From<&Hand> for FinalHand {
    fn from(hand: &Hand) -> Self {
        Self::new(hand.value(), hand.is_blackjack())
    }
}

/// Resolves a seat against the dealer.
///
/// Returns the outcome and the amount credited back to the wallet. The stake
/// has already left the wallet, so a loss credits nothing and a push credits
/// the stake.
///
/// Both hands busting is a push.
///
/// # Example
///
/// ```
/// use blackjack_table::game::payout::{FinalHand, settle};
/// use blackjack_table::{HandOutcome, Money, PayoutRatio};
///
/// let bet = Money::from_dollars(100);
/// let (outcome, payout) = settle(
///     FinalHand::new(21, true),
///     FinalHand::new(20, false),
///     bet,
///     PayoutRatio::THREE_TO_TWO,
/// );
/// assert_eq!(outcome, HandOutcome::Blackjack);
/// assert_eq!(payout, Money::from_dollars(250));
/// ```
#[must_use]
pub fn settle(
    player: FinalHand,
    dealer: FinalHand,
    bet: Money,
    blackjack_pays: PayoutRatio,
) -> (HandOutcome, Money) {
    let (p, d) = (player.value, dealer.value);

    if player.blackjack && !dealer.blackjack {
        (HandOutcome::Blackjack, bet + blackjack_pays.winnings(bet))
    } else if p <= BLACKJACK && (d > BLACKJACK || p > d) {
        (HandOutcome::Win, bet + bet)
    } else if (p > BLACKJACK && d <= BLACKJACK) || (p <= BLACKJACK && p < d) {
        (HandOutcome::Lose, Money::ZERO)
    } else {
        (HandOutcome::Push, bet)
    }
}
