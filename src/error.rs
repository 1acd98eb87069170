//! Error types for game operations.

use std::io;

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards are left to draw.
    #[error("deck is empty")]
    Empty,
}

/// Errors raised when seating players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot seat {requested} players; the table takes 1 to {max}")]
pub struct SeatError {
    /// Number of players requested.
    pub requested: usize,
    /// Largest table size allowed.
    pub max: usize,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Player already has a stake this round.
    #[error("player has already placed a bet")]
    AlreadyBet,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not every player has placed a bet.
    #[error("player {0} has not placed a bet")]
    MissingBet(usize),
    /// The deck ran out mid-deal.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The deck ran out.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during the dealer turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The deck ran out while the dealer had to draw.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Failures of the input collaborator itself.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream reached its end.
    #[error("input stream closed")]
    Closed,
    /// Reading from the input stream failed.
    #[error("failed to read input")]
    Io(#[from] io::Error),
}

/// Unrecoverable errors that end a game session.
#[derive(Debug, Error)]
pub enum GameError {
    /// The table could not be seated.
    #[error(transparent)]
    Seat(#[from] SeatError),
    /// The deck was exhausted.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A bet was rejected by the engine.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer turn or showdown failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    /// The input collaborator failed.
    #[error(transparent)]
    Input(#[from] InputError),
}

impl GameError {
    /// Returns whether the error comes from an exhausted deck.
    #[must_use]
    pub const fn is_deck_empty(&self) -> bool {
        matches!(
            self,
            Self::Deck(DeckError::Empty)
                | Self::Deal(DealError::Deck(DeckError::Empty))
                | Self::Action(ActionError::Deck(DeckError::Empty))
                | Self::Showdown(ShowdownError::Deck(DeckError::Empty))
        )
    }
}
