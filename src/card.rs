//! Card types and deck constants.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseRankError;

/// Card suit.
///
/// The declaration order (Clubs, Hearts, Spades, Diamonds) defines the suit
/// component of the deck index; see [`Card::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits in deck-index order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Hearts, Self::Spades, Self::Diamonds];

    /// Returns the suit name ("Clubs", "Hearts", "Spades", "Diamonds").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
        }
    }

    const fn ordinal(self) -> u8 {
        match self {
            Self::Clubs => 0,
            Self::Hearts => 1,
            Self::Spades => 2,
            Self::Diamonds => 3,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, Ace (low) through King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Rank {
    /// All thirteen ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the numeric value of the rank (1-10).
    ///
    /// Face cards all count as 10; see [`Self::royal_value`] for their
    /// distinguishing value.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self as u8,
        }
    }

    /// Returns the royal value of a face card (Jack 11, Queen 12, King 13),
    /// or `None` for non-face cards.
    #[must_use]
    pub const fn royal_value(self) -> Option<u8> {
        match self {
            Self::Jack | Self::Queen | Self::King => Some(self as u8),
            _ => None,
        }
    }

    /// Returns the full rank name ("Ace", "Two", ... "King").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    const fn ordinal(self) -> u8 {
        self as u8 - 1
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ace" => Ok(Self::Ace),
            "Two" => Ok(Self::Two),
            "Three" => Ok(Self::Three),
            "Four" => Ok(Self::Four),
            "Five" => Ok(Self::Five),
            "Six" => Ok(Self::Six),
            "Seven" => Ok(Self::Seven),
            "Eight" => Ok(Self::Eight),
            "Nine" => Ok(Self::Nine),
            "Ten" => Ok(Self::Ten),
            "Jack" => Ok(Self::Jack),
            "Queen" => Ok(Self::Queen),
            "King" => Ok(Self::King),
            _ => Err(ParseRankError::InvalidName),
        }
    }
}

/// A playing card.
///
/// Rank and suit are fixed at construction; only the facing is mutable.
/// Cards start face down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
    /// Whether the card is currently face up.
    face_up: bool,
}

impl Card {
    /// Creates a new card, face down.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Creates a new card from a full rank name ("Ace" through "King").
    ///
    /// # Errors
    ///
    /// Returns an error if the rank name is not one of the thirteen valid
    /// names. This is the only fallible construction path in the crate.
    pub fn from_name(name: &str, suit: Suit) -> Result<Self, ParseRankError> {
        Ok(Self::new(name.parse()?, suit))
    }

    /// Returns the deck-relative index of the card (0-51).
    ///
    /// Cards are ordered rank-major: the four Aces occupy indices 0-3 in suit
    /// order, the four Twos 4-7, and so on up to the King of Diamonds at 51.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.rank.ordinal() * 4 + self.suit.ordinal()
    }

    /// Returns the numeric value of the card (1-10).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Returns the royal value for face cards, or `None`.
    #[must_use]
    pub const fn royal_value(self) -> Option<u8> {
        self.rank.royal_value()
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Turns the card face up.
    pub const fn show_front(&mut self) {
        self.face_up = true;
    }

    /// Turns the card face down.
    pub const fn show_back(&mut self) {
        self.face_up = false;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards dealt to each player.
pub const HAND_SIZE: usize = DECK_SIZE / 2;
