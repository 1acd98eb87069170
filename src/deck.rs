//! The single 52-card deck used for a whole game.

use rand::Rng;
use tracing::{debug, warn};

use crate::card::{ACE, Card, DECK_SIZE, KING, Suit};
use crate::error::DeckError;

/// An ordered deck of cards. The top of the deck is the first card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.cards()[0].to_string(), "A/Hearts");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.initialize();
        deck
    }

    /// Creates a deck that deals `cards` in the given order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Resets the deck to all 52 cards, suit-major and rank-minor.
    pub fn initialize(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in ACE..=KING {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the deck in place.
    ///
    /// Each position from the first to the second-to-last is swapped with a
    /// uniformly chosen position at or after it, so a seeded `rng` always
    /// yields the same order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let len = self.cards.len();
        for i in 0..len.saturating_sub(1) {
            let j = rng.random_range(i..len);
            self.cards.swap(i, j);
        }
        debug!(cards = len, "deck shuffled");
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            warn!("draw from an exhausted deck");
            return Err(DeckError::Empty);
        }
        Ok(self.cards.remove(0))
    }

    /// Returns the remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
