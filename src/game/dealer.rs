use tracing::{debug, info};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{PlayerResult, RoundResult};

use super::payout::{FinalHand, settle};
use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the table rules.
    ///
    /// The dealer draws until the total reaches `options.dealer_stands_on`,
    /// soft totals included. The dealer plays even when every player has
    /// busted.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        while self.options.dealer_must_hit(self.dealer_hand.value()) {
            let card = self.deck.draw()?;
            self.dealer_hand.add_card(card);
            drawn_cards.push(card);
            debug!(%card, value = self.dealer_hand.value(), "dealer draws");
        }
        self.dealer_hand.stand();

        self.state = GameState::RoundOver;

        Ok(drawn_cards)
    }

    /// Performs the showdown and credits payouts.
    ///
    /// This function:
    /// 1. Compares each player's hand to the dealer's hand
    /// 2. Calculates the payout based on the outcome
    /// 3. Credits player wallets and clears their stakes
    /// 4. Returns detailed results for each player
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let dealer = FinalHand::from(&self.dealer_hand);
        let dealer_bust = self.dealer_hand.is_bust();

        let mut player_results = Vec::with_capacity(self.players.len());

        for (index, player) in self.players.iter_mut().enumerate() {
            let bet = player.bet();
            let hand = FinalHand::from(&player.hand);
            let (outcome, payout) = settle(hand, dealer, bet, self.options.blackjack_pays);

            player.balance(payout);
            player.clear_bet();
            debug!(player = index, ?outcome, %payout, wallet = %player.wallet(), "settled");

            player_results.push(PlayerResult {
                player: index,
                outcome,
                bet,
                payout,
                player_value: hand.value,
                player_blackjack: hand.blackjack,
                wallet: player.wallet(),
            });
        }

        self.state = GameState::Settled;
        info!(round = self.rounds, dealer = dealer.value, "round settled");

        Ok(RoundResult {
            players: player_results,
            dealer_value: dealer.value,
            dealer_bust,
            dealer_blackjack: dealer.blackjack,
        })
    }
}
