use tracing::{debug, info};

use crate::error::{BetError, DealError};
use crate::money::Money;

use super::{Game, GameState, INITIAL_CARDS};

impl Game {
    /// Starts the betting phase of a new round.
    pub fn start_betting(&mut self) {
        self.rounds += 1;
        self.state = GameState::Betting;
        info!(round = self.rounds, players = self.players.len(), "betting opened");
    }

    /// Places a bet for the player in seat `player`.
    ///
    /// The stake leaves the wallet immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the player cannot
    /// be found, the player already bet this round, the bet is zero, or the
    /// player lacks funds.
    pub fn bet(&mut self, player: usize, amount: Money) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let seat = self
            .players
            .get_mut(player)
            .ok_or(BetError::PlayerNotFound)?;

        if !seat.bet().is_zero() {
            return Err(BetError::AlreadyBet);
        }

        seat.place_bet(amount)?;
        debug!(player, %amount, wallet = %seat.wallet(), "bet placed");

        Ok(())
    }

    /// Deals the initial cards to every player and then to the dealer.
    ///
    /// A dealer natural ends the round on the spot: no player or dealer turns
    /// are played and the game moves straight to `RoundOver`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, a player has not
    /// bet, or the deck runs out.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        if let Some(index) = self.players.iter().position(|p| p.bet().is_zero()) {
            return Err(DealError::MissingBet(index));
        }

        for (index, player) in self.players.iter_mut().enumerate() {
            player.hand.redeal(&mut self.deck, INITIAL_CARDS)?;
            debug!(player = index, hand = %player.hand, value = player.hand.value(), "dealt");
        }
        self.dealer_hand.redeal(&mut self.deck, INITIAL_CARDS)?;
        debug!(hand = %self.dealer_hand, "dealer dealt");

        if self.dealer_hand.is_blackjack() {
            info!(round = self.rounds, "dealer blackjack");
            self.current_player = None;
            self.state = GameState::RoundOver;
        } else {
            self.advance_turn(None);
        }

        Ok(())
    }
}
