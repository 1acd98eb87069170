//! Game engine and state management.

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::SeatError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::Player;

mod actions;
mod bet;
mod dealer;
pub mod payout;
mod round;
pub mod state;

pub use state::GameState;

/// Cards dealt to every hand at the start of a round.
pub const INITIAL_CARDS: usize = 2;

/// A blackjack table that manages the deck, the players and the round flow.
///
/// The game owns the deck, every seated player and the dealer's hand. Rounds
/// are driven either step by step ([`Game::start_betting`], [`Game::bet`],
/// [`Game::deal`], [`Game::hit`], [`Game::stand`], [`Game::dealer_play`],
/// [`Game::showdown`]) or all at once through [`Game::play_round`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left in the deck.
    pub deck: Deck,
    /// Table rules.
    pub options: GameOptions,
    state: GameState,
    players: Vec<Player>,
    dealer_hand: Hand,
    current_player: Option<usize>,
    rounds: u32,
}

impl Game {
    /// Seats `player_count` players in front of a fresh, unshuffled deck.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError`] unless `player_count` is between 1 and
    /// `options.max_players`.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 3).unwrap();
    /// assert_eq!(game.player_count(), 3);
    /// assert!(Game::new(GameOptions::default(), 6).is_err());
    /// ```
    pub fn new(options: GameOptions, player_count: usize) -> Result<Self, SeatError> {
        Self::with_deck(options, player_count, Deck::new())
    }

    /// Seats `player_count` players in front of `deck`.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError`] unless `player_count` is between 1 and
    /// `options.max_players`.
    pub fn with_deck(
        options: GameOptions,
        player_count: usize,
        deck: Deck,
    ) -> Result<Self, SeatError> {
        if !options.seats(player_count) {
            return Err(SeatError {
                requested: player_count,
                max: options.max_players,
            });
        }

        let players = (0..player_count)
            .map(|_| Player::new(options.starting_wallet))
            .collect();

        Ok(Self {
            deck,
            options,
            state: GameState::Idle,
            players,
            dealer_hand: Hand::new(),
            current_player: None,
            rounds: 0,
        })
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the seated players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in seat `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the dealer card players see during their turns.
    #[must_use]
    pub fn dealer_shown_card(&self) -> Option<Card> {
        self.dealer_hand.cards().get(1).copied()
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seat whose turn it is.
    ///
    /// Returns `None` outside the player turn phase.
    #[must_use]
    pub const fn current_player(&self) -> Option<usize> {
        self.current_player
    }

    /// Returns the number of rounds started so far.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Clears all hands and returns the game to the `Idle` state.
    ///
    /// Wallets are untouched. Unsettled stakes stay with the house.
    pub fn clear_round(&mut self) {
        for player in &mut self.players {
            player.hand.clear();
            player.clear_bet();
        }
        self.dealer_hand.clear();
        self.current_player = None;
        self.state = GameState::Idle;
        debug!("round cleared");
    }

    /// Moves the turn to the next seat after `from` without a natural.
    ///
    /// Hands the table to the dealer when no such seat remains.
    fn advance_turn(&mut self, from: Option<usize>) {
        let start = from.map_or(0, |index| index + 1);
        self.current_player = (start..self.players.len())
            .find(|&index| !self.players[index].hand.is_blackjack());

        match self.current_player {
            Some(index) => {
                self.state = GameState::PlayerTurn;
                debug!(player = index, "player turn");
            }
            None => {
                self.state = GameState::DealerTurn;
                debug!("dealer turn");
            }
        }
    }
}
