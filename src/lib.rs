//! An interactive single-deck blackjack table.
//!
//! One to five players bet against a dealer from a single 52-card deck that
//! lasts the whole game. The crate provides a [`Game`] type that manages the
//! round flow: betting, the initial deal, player turns, the dealer's draw and
//! settlement. Players talk to the table through the [`input::Input`] and
//! [`output::Output`] traits, and [`session::run`] loops rounds until the
//! players stop.
//!
//! # Example
//!
//! ```
//! use blackjack_table::{Game, GameOptions, Money};
//!
//! let mut game = Game::new(GameOptions::default(), 1).unwrap();
//! game.start_betting();
//! game.bet(0, Money::from_dollars(10)).unwrap();
//! game.deal().unwrap();
//! assert_eq!(game.player(0).unwrap().hand.len(), 2);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod money;
pub mod options;
pub mod output;
pub mod player;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, DeckError, GameError, InputError, SeatError, ShowdownError,
};
pub use game::{Game, GameState, INITIAL_CARDS};
pub use hand::{Hand, HandStatus};
pub use money::Money;
pub use options::{GameOptions, PayoutRatio};
pub use player::Player;
pub use result::{HandOutcome, PlayerResult, RoundResult};
