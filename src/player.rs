//! Player identity and seat.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

/// One of the two player positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The first player.
    PlayerOne,
    /// The second player.
    PlayerTwo,
}

impl Seat {
    /// Both seats in order.
    pub const BOTH: [Self; 2] = [Self::PlayerOne, Self::PlayerTwo];

    /// Returns the opposing seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::PlayerOne => Self::PlayerTwo,
            Self::PlayerTwo => Self::PlayerOne,
        }
    }

    /// Returns the seat's index (0 for player one, 1 for player two).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::PlayerOne => 0,
            Self::PlayerTwo => 1,
        }
    }
}

/// A player: display name, seat, and hand.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    seat: Seat,
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new(name: String, seat: Seat) -> Self {
        Self {
            name,
            seat,
            hand: Hand::new(),
        }
    }

    /// Returns the player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's seat.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Replaces the player's hand with the given cards (bottom first).
    pub fn set_hand(&mut self, cards: Vec<Card>) {
        self.hand = Hand::from_cards(cards);
    }

    /// Removes and returns the two cards at the top of the player's hand.
    ///
    /// Returns `None` without modifying the hand if fewer than two cards
    /// remain.
    pub fn show_top_two(&mut self) -> Option<[Card; 2]> {
        self.hand.take_top_two()
    }

    /// Adds middle cards to the bottom of the player's hand, face down.
    pub fn take_middle_cards(&mut self, cards: &[Card]) {
        self.hand.take_to_bottom(cards);
    }

    /// Removes and returns every card in the player's hand.
    pub fn clear_hand(&mut self) -> Vec<Card> {
        self.hand.drain()
    }
}
