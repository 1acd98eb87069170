//! Hand representation and scoring, shared by players and the dealer.

use core::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.score());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Scores a set of cards.
///
/// Every Ace counts 11 until the total would bust, then Aces drop to 1 one at
/// a time.
///
/// # Example
///
/// ```
/// use blackjack_table::{Card, Suit, hand};
///
/// let cards = [
///     Card::new(Suit::Hearts, 1),
///     Card::new(Suit::Spades, 1),
///     Card::new(Suit::Clubs, 9),
/// ];
/// assert_eq!(hand::score(&cards), 21);
/// assert!(!hand::is_blackjack(&cards));
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the cards are a natural: two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == BLACKJACK
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand can still take cards.
    Active,
    /// Owner has stood.
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a blackjack (natural 21).
    Blackjack,
}

/// A hand of cards.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
        }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        for &card in cards {
            hand.add_card(card);
        }
        hand
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let value = self.value();
        if value > BLACKJACK {
            self.status = HandStatus::Bust;
        } else if self.cards.len() == 2 && value == BLACKJACK {
            self.status = HandStatus::Blackjack;
        } else if self.status == HandStatus::Blackjack {
            self.status = HandStatus::Active;
        }
    }

    /// Empties the hand and draws `count` fresh cards from `deck`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] as soon as a draw fails. Cards drawn
    /// before the failure stay in the hand.
    pub fn redeal(&mut self, deck: &mut Deck, count: usize) -> Result<(), DeckError> {
        self.clear();
        for _ in 0..count {
            let card = deck.draw()?;
            self.add_card(card);
        }
        Ok(())
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Marks an active hand as stood.
    pub fn stand(&mut self) {
        if self.status == HandStatus::Active {
            self.status = HandStatus::Stand;
        }
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.status = HandStatus::Active;
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("(empty)");
        }
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
