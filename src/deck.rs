//! The 52-card game deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};

/// A standard 52-card deck.
///
/// A freshly built or reset deck holds every card exactly once, face down, in
/// ascending [`Card::index`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the standard deck in ascending index order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck from an explicit card order.
    ///
    /// The first card of `cards` is the first card dealt.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck into a uniform random permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the whole deck alternately, card by card, into two hands.
    ///
    /// The first card goes to the first hand, the second to the second hand,
    /// and so on. Relative order within each hand matches the deck order. The
    /// deck is left empty.
    pub fn deal(&mut self) -> (Vec<Card>, Vec<Card>) {
        let mut first = Vec::with_capacity(HAND_SIZE);
        let mut second = Vec::with_capacity(HAND_SIZE);

        for (i, card) in self.cards.drain(..).enumerate() {
            if i % 2 == 0 {
                first.push(card);
            } else {
                second.push(card);
            }
        }

        (first, second)
    }

    /// Returns dealt cards to the deck and restores the sorted order.
    ///
    /// Every card is turned face down and the deck is sorted back into
    /// ascending index order.
    pub fn reset(&mut self, returned: impl IntoIterator<Item = Card>) {
        self.cards.extend(returned);

        for card in &mut self.cards {
            card.show_back();
        }

        self.cards.sort_unstable_by_key(|card| card.index());
    }

    /// Returns the cards currently in the deck, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
