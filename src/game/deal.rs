use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DealError;

use super::{Game, GameState};

impl Game {
    /// Shuffles the deck and deals it out, 26 cards to each player.
    ///
    /// Cards alternate between the players one at a time, so each hand keeps
    /// the shuffled deck's relative order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the idle state (the deck must be
    /// whole before it can be dealt; call [`Game::reset`] first).
    pub fn deal(&self) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if *state != GameState::Idle {
            return Err(DealError::InvalidState);
        }

        let mut deck = self.deck.lock();
        deck.shuffle(&mut *self.rng.lock());
        let (first, second) = deck.deal();
        drop(deck);

        let mut players = self.players.lock();
        players[0].set_hand(first);
        players[1].set_hand(second);
        drop(players);

        *self.winner.lock() = None;
        *state = GameState::Dealt;

        Ok(())
    }

    /// Gathers every card back into the deck and restores the sorted order.
    ///
    /// Cards come back from both hands and the middle, end up face down in
    /// ascending index order, and the game returns to the idle state. Allowed
    /// from any state.
    pub fn reset(&self) {
        let mut returned: Vec<Card> = self.middle.lock().drain(..).collect();

        let mut players = self.players.lock();
        for player in players.iter_mut() {
            returned.extend(player.clear_hand());
        }
        drop(players);

        self.deck.lock().reset(returned);

        *self.winner.lock() = None;
        *self.state.lock() = GameState::Idle;
    }
}
