//! Card value types: suits, ranks, and the physical deck.
//!
//! ## Model
//!
//! A card is a plain `(suit, rank)` value. Games with four players run two
//! concatenated decks, so duplicate cards are legal and every collection in
//! the engine treats cards as a multiset: removing a card consumes exactly
//! one copy.
//!
//! `Card` implements `Ord` so ordered collections iterate deterministically.
//! The ordering carries no game meaning.

use serde::{Deserialize, Serialize};

/// Card suit.
///
/// Spades and clubs are the *black* suits; hearts and diamonds are red.
/// Diamonds double as the game's tradeable currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All four suits, in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Whether this suit is black (spades or clubs).
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Suit::Spades | Suit::Clubs)
    }

    /// Whether this suit is red (hearts or diamonds).
    #[must_use]
    pub const fn is_red(self) -> bool {
        !self.is_black()
    }

    /// Unicode symbol for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, two through ace.
///
/// Ranks only matter for equality (combos are same-rank sets) and for the
/// King discard triggers; there is no trick-taking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All thirteen ranks, in canonical order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Short display label (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Whether this card is a King (any suit).
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Whether this card is a diamond.
    #[must_use]
    pub const fn is_diamond(self) -> bool {
        matches!(self.suit, Suit::Diamonds)
    }

    /// Whether this card is a heart.
    #[must_use]
    pub const fn is_heart(self) -> bool {
        matches!(self.suit, Suit::Hearts)
    }

    /// Whether this card is black (spade or club).
    #[must_use]
    pub const fn is_black(self) -> bool {
        self.suit.is_black()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Number of cards in one standard deck.
pub const DECK_SIZE: usize = 52;

/// Build `deck_count` concatenated standard decks, unshuffled.
///
/// No dedup across decks: with two decks every card exists twice and the
/// engine tracks both copies.
#[must_use]
pub fn standard_deck(deck_count: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE * deck_count);
    for _ in 0..deck_count {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
    }
    cards
}
