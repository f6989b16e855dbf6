//! Round result types.

use crate::player::Seat;

/// Outcome of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player one won the round; player two absorbs the middle cards.
    PlayerOneWin,
    /// Player two won the round; player one absorbs the middle cards.
    PlayerTwoWin,
    /// The round was a draw; each player reclaims two cards.
    Draw,
}

/// Result of a single resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The round outcome.
    pub outcome: RoundOutcome,
    /// The game winner, if this round ended the game.
    pub winner: Option<Seat>,
    /// Cards remaining in player one's hand after resolution.
    pub player_one_remaining: usize,
    /// Cards remaining in player two's hand after resolution.
    pub player_two_remaining: usize,
}

impl RoundResult {
    /// Returns whether the game ended with this round.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }
}
