//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when parsing a rank name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseRankError {
    /// The name is not one of the thirteen valid rank names.
    #[error("invalid card rank name")]
    InvalidName,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
}

/// Errors that can occur when revealing the top cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    /// Invalid game state for revealing.
    #[error("invalid game state for revealing")]
    InvalidState,
    /// A player has fewer than two cards left.
    #[error("a player has fewer than two cards left")]
    NotEnoughCards,
}

/// Errors that can occur when flipping the middle cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    /// Invalid game state for flipping.
    #[error("invalid game state for flipping")]
    InvalidState,
}

/// Errors that can occur when resolving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Invalid game state for resolving a round.
    #[error("invalid game state for resolving a round")]
    InvalidState,
}
