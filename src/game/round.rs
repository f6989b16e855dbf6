use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{FlipError, ResolveError, RevealError};
use crate::player::Seat;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Reveals the top two cards of each hand into the middle, face down.
    ///
    /// The middle order is player one's pair followed by player two's pair,
    /// each pair lowest-in-hand first. Returns the four revealed cards.
    ///
    /// # Errors
    ///
    /// Returns an error if hands have not been dealt, a round is already in
    /// progress, or either player has fewer than two cards left.
    pub fn reveal(&self) -> Result<[Card; 4], RevealError> {
        let mut state = self.state.lock();
        if *state != GameState::Dealt {
            return Err(RevealError::InvalidState);
        }

        let mut players = self.players.lock();
        if players.iter().any(|player| player.hand().len() < 2) {
            return Err(RevealError::NotEnoughCards);
        }

        // Both hands were checked above, so the takes cannot fail.
        let [one_a, one_b] = players[0].show_top_two().ok_or(RevealError::NotEnoughCards)?;
        let [two_a, two_b] = players[1].show_top_two().ok_or(RevealError::NotEnoughCards)?;
        drop(players);

        let revealed = [one_a, one_b, two_a, two_b];
        let mut middle = self.middle.lock();
        middle.clear();
        middle.extend(revealed);
        drop(middle);

        *state = GameState::Revealed;

        Ok(revealed)
    }

    /// Flips the middle cards face up.
    ///
    /// Returns the four flipped cards.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no face-down cards in the middle to flip.
    pub fn flip(&self) -> Result<[Card; 4], FlipError> {
        let mut state = self.state.lock();
        if *state != GameState::Revealed {
            return Err(FlipError::InvalidState);
        }

        let mut middle = self.middle.lock();
        for card in middle.iter_mut() {
            card.show_front();
        }

        let flipped = [middle[0], middle[1], middle[2], middle[3]];
        drop(middle);

        *state = GameState::Flipped;

        Ok(flipped)
    }

    /// Resolves the round in favour of the given seat.
    ///
    /// The loser takes all four middle cards to the bottom of their hand. If
    /// the winner's hand is now empty, the game is over and they win;
    /// otherwise play continues with another reveal.
    ///
    /// # Errors
    ///
    /// Returns an error if the middle cards have not been flipped face up.
    pub fn round_win(&self, seat: Seat) -> Result<RoundResult, ResolveError> {
        let mut state = self.state.lock();
        if *state != GameState::Flipped {
            return Err(ResolveError::InvalidState);
        }

        let cards: Vec<Card> = self.middle.lock().drain(..).collect();

        let mut players = self.players.lock();
        players[seat.opponent().index()].take_middle_cards(&cards);

        let game_over = players[seat.index()].hand().is_empty();
        let remaining = [players[0].hand().len(), players[1].hand().len()];
        drop(players);

        let winner = if game_over {
            *self.winner.lock() = Some(seat);
            *state = GameState::GameOver;
            Some(seat)
        } else {
            *state = GameState::Dealt;
            None
        };

        let outcome = match seat {
            Seat::PlayerOne => RoundOutcome::PlayerOneWin,
            Seat::PlayerTwo => RoundOutcome::PlayerTwoWin,
        };

        Ok(RoundResult {
            outcome,
            winner,
            player_one_remaining: remaining[0],
            player_two_remaining: remaining[1],
        })
    }

    /// Resolves the round as a draw.
    ///
    /// Each player takes back one card they played and one the opponent
    /// played, to the bottom of their hand, so hand sizes are unchanged. Play
    /// continues with another reveal.
    ///
    /// # Errors
    ///
    /// Returns an error if the middle cards have not been flipped face up.
    pub fn round_draw(&self) -> Result<RoundResult, ResolveError> {
        let mut state = self.state.lock();
        if *state != GameState::Flipped {
            return Err(ResolveError::InvalidState);
        }

        let cards: Vec<Card> = self.middle.lock().drain(..).collect();

        // Middle order is [p1, p1, p2, p2]: each player reclaims their own
        // second card plus the opponent's second card.
        let mut players = self.players.lock();
        players[0].take_middle_cards(&[cards[1], cards[3]]);
        players[1].take_middle_cards(&[cards[0], cards[2]]);
        let remaining = [players[0].hand().len(), players[1].hand().len()];
        drop(players);

        *state = GameState::Dealt;

        Ok(RoundResult {
            outcome: RoundOutcome::Draw,
            winner: None,
            player_one_remaining: remaining[0],
            player_two_remaining: remaining[1],
        })
    }
}
