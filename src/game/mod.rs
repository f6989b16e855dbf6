//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::options::GameOptions;
use crate::player::{Player, Seat};

mod deal;
mod round;
pub mod state;

pub use state::GameState;

/// A Twenty-Four game engine that manages the deck, both hands, and the
/// round flow.
///
/// The game owns the deck, the two players, and the middle cards. Round
/// verdicts (win or draw) come from outside the engine, since Twenty-Four
/// rounds are judged by the players themselves. Use [`GameOptions`] to set
/// the player display names.
pub struct Game {
    /// The game deck. Empty while hands are dealt out.
    pub deck: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Both players, indexed by [`Seat::index`].
    pub players: Mutex<[Player; 2]>,
    /// Cards currently revealed in the middle of the board.
    pub middle: Mutex<Vec<Card>>,
    /// Winner of the game, set when a won round empties the winner's hand.
    winner: Mutex<Option<Seat>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The deck starts sorted and no cards are dealt.
    ///
    /// # Example
    ///
    /// ```
    /// use tfrs::{Game, GameOptions, GameState};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// assert_eq!(game.state(), GameState::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let players = [
            Player::new(options.player_one.clone(), Seat::PlayerOne),
            Player::new(options.player_two.clone(), Seat::PlayerTwo),
        ];

        Self {
            deck: Mutex::new(Deck::standard()),
            options,
            state: Mutex::new(GameState::Idle),
            players: Mutex::new(players),
            middle: Mutex::new(Vec::new()),
            winner: Mutex::new(None),
            rng: Mutex::new(rng),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the winner of the game, if it has ended.
    pub fn winner(&self) -> Option<Seat> {
        *self.winner.lock()
    }

    /// Returns the cards currently in the middle of the board.
    ///
    /// The order is player one's two cards followed by player two's two cards,
    /// each pair lowest-in-hand first.
    pub fn middle_cards(&self) -> Vec<Card> {
        self.middle.lock().clone()
    }

    /// Returns a clone of the specified player's hand, bottom first.
    pub fn hand(&self, seat: Seat) -> Vec<Card> {
        self.players.lock()[seat.index()].hand().cards().to_vec()
    }

    /// Returns the number of cards in the specified player's hand.
    pub fn hand_len(&self, seat: Seat) -> usize {
        self.players.lock()[seat.index()].hand().len()
    }

    /// Returns the specified player's display name.
    pub fn player_name(&self, seat: Seat) -> String {
        String::from(self.players.lock()[seat.index()].name())
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }
}
