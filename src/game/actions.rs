use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self, player: usize) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        if self.current_player != Some(player) {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hand that goes over 21 ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, it is not the
    /// player's turn, or the deck is empty.
    pub fn hit(&mut self, player: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn(player)?;

        let card = self.deck.draw()?;
        let hand = &mut self.players[player].hand;
        hand.add_card(card);
        debug!(player, %card, value = hand.value(), "hit");

        if hand.is_bust() {
            debug!(player, value = hand.value(), "bust");
            self.advance_turn(Some(player));
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or it is not
    /// the player's turn.
    pub fn stand(&mut self, player: usize) -> Result<(), ActionError> {
        self.ensure_player_turn(player)?;

        let hand = &mut self.players[player].hand;
        hand.stand();
        debug!(player, value = hand.value(), "stand");

        self.advance_turn(Some(player));

        Ok(())
    }
}
