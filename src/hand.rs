//! Ordered player hand.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A player's ordered hand.
///
/// The end of the sequence is the top of the hand: cards are played from the
/// top and reclaimed cards go back to the bottom (the front).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand from an ordered card sequence (bottom first).
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the two cards at the top of the hand.
    ///
    /// The cards keep their relative order: the lower of the two comes first.
    /// Returns `None` without modifying the hand if fewer than two cards
    /// remain.
    pub fn take_top_two(&mut self) -> Option<[Card; 2]> {
        if self.cards.len() < 2 {
            return None;
        }

        let top = self.cards.pop()?;
        let under = self.cards.pop()?;
        Some([under, top])
    }

    /// Adds cards to the bottom of the hand, face down.
    ///
    /// The given order is preserved: `cards[0]` becomes the new bottom card.
    pub fn take_to_bottom(&mut self, cards: &[Card]) {
        let mut returned: Vec<Card> = cards.to_vec();
        for card in &mut returned {
            card.show_back();
        }

        returned.append(&mut self.cards);
        self.cards = returned;
    }

    /// Removes and returns every card in the hand.
    pub fn drain(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the cards in the hand, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
