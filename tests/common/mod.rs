//! Shared helpers for the integration tests.

use blackjack_table::{Card, Deck, Suit};

pub const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that deals `draws` in order.
pub fn stacked(draws: &[Card]) -> Deck {
    Deck::from_cards(draws.to_vec())
}
