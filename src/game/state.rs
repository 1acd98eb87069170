//! Game state types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round in progress.
    Idle,
    /// Accepting bets for the next round.
    Betting,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are final and can be settled.
    RoundOver,
    /// Payouts have been credited.
    Settled,
}
