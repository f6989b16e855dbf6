//! Game state types.

/// Game state.
///
/// The round cycle is `Dealt` -> `Revealed` -> `Flipped` -> back to `Dealt`
/// (or `GameOver` when a won round empties the winner's hand).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Deck assembled and sorted; waiting for a deal.
    Idle,
    /// Hands dealt; waiting for both players to reveal their top two cards.
    Dealt,
    /// Four cards sit face down in the middle; waiting for the flip.
    Revealed,
    /// Middle cards are face up; waiting for the round verdict.
    Flipped,
    /// A player has emptied their hand and won the game.
    GameOver,
}
