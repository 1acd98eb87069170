use tracing::info_span;

use crate::error::GameError;
use crate::input::{Action, Input, Prompt, ask, parse_action, parse_bid};
use crate::output::{Event, Output};
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    /// Plays one complete round through the given collaborators.
    ///
    /// Bets are taken in seat order, the initial cards are dealt, every player
    /// without a natural plays their turn, the dealer draws, and all seats are
    /// settled. A dealer natural skips straight to settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out or the input fails. Both leave
    /// the round unfinished.
    pub fn play_round<I, O>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<RoundResult, GameError>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        self.clear_round();
        self.start_betting();
        let _span = info_span!("round", round = self.rounds).entered();

        for player in 0..self.players.len() {
            let wallet = self.players[player].wallet();
            let prompt = Prompt::Bid { player, wallet };
            let amount = ask(input, output, &prompt, |token| parse_bid(token, wallet))?;
            self.bet(player, amount)?;
        }

        self.deal()?;

        if self.state == GameState::RoundOver {
            output.emit(&Event::DealerBlackjack {
                hand: &self.dealer_hand,
            });
        }

        while let Some(player) = self.current_player {
            output.emit(&Event::Turn {
                player,
                dealer_card: self.dealer_shown_card(),
                hand: &self.players[player].hand,
            });

            match ask(input, output, &Prompt::Action { player }, parse_action)? {
                Action::Hit => {
                    self.hit(player)?;
                    let hand = &self.players[player].hand;
                    if hand.is_bust() {
                        output.emit(&Event::Bust { player, hand });
                    }
                }
                Action::Stand => self.stand(player)?,
            }
        }

        if self.state == GameState::DealerTurn {
            self.dealer_play()?;
            output.emit(&Event::DealerHand {
                hand: &self.dealer_hand,
            });
        }

        let result = self.showdown()?;
        for settled in &result.players {
            output.emit(&Event::Settled {
                result: settled,
                hand: &self.players[settled.player].hand,
            });
        }

        Ok(result)
    }
}
