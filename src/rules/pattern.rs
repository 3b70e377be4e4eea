//! Combo suit patterns.
//!
//! A pattern is a predicate over the *suit multiset* of a same-rank card
//! subset. The set of patterns is closed: rule tables pick which patterns
//! score and what they pay, but cannot define new predicates. This keeps
//! tables pure data.
//!
//! Rank equality is the detector's contract, not checked here, with one
//! exception: `FourKings` also demands the King rank, since it is the only
//! pattern tied to a specific rank.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Suit};

/// Suit-multiset predicate for a same-rank card subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboPattern {
    /// All four kings, one per suit.
    FourKings,
    /// Four cards of one rank, all four suits present.
    FourOfAKind,
    /// Three cards of one rank with at least one diamond among them.
    ThreeWithDiamond,
    /// Heart, spade and club of one rank (no diamond fits in three cards).
    HeartBothBlacks,
    /// Heart plus diamond.
    HeartDiamond,
    /// Heart plus one black card.
    HeartBlack,
    /// Diamond plus one black card.
    DiamondBlack,
    /// Two black cards, any mix of spades and clubs.
    TwoBlacks,
}

impl ComboPattern {
    /// Exact number of cards this pattern consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            ComboPattern::FourKings | ComboPattern::FourOfAKind => 4,
            ComboPattern::ThreeWithDiamond | ComboPattern::HeartBothBlacks => 3,
            ComboPattern::HeartDiamond
            | ComboPattern::HeartBlack
            | ComboPattern::DiamondBlack
            | ComboPattern::TwoBlacks => 2,
        }
    }

    /// Whether `cards` (already same-rank) satisfies this pattern.
    ///
    /// With two decks duplicate suits occur; counts are exact, so `♠♠♣♣`
    /// is *not* four of a kind and `♠♠K ♣♣K` kings are not four kings.
    #[must_use]
    pub fn matches(self, cards: &[Card]) -> bool {
        if cards.len() != self.arity() {
            return false;
        }

        let spades = cards.iter().filter(|c| c.suit == Suit::Spades).count();
        let hearts = cards.iter().filter(|c| c.is_heart()).count();
        let diamonds = cards.iter().filter(|c| c.is_diamond()).count();
        let clubs = cards.iter().filter(|c| c.suit == Suit::Clubs).count();

        match self {
            ComboPattern::FourKings => {
                cards.iter().all(|c| c.is_king())
                    && spades == 1
                    && hearts == 1
                    && diamonds == 1
                    && clubs == 1
            }
            ComboPattern::FourOfAKind => {
                spades == 1 && hearts == 1 && diamonds == 1 && clubs == 1
            }
            ComboPattern::ThreeWithDiamond => diamonds >= 1,
            ComboPattern::HeartBothBlacks => hearts == 1 && spades == 1 && clubs == 1,
            ComboPattern::HeartDiamond => hearts == 1 && diamonds == 1,
            ComboPattern::HeartBlack => hearts == 1 && spades + clubs == 1,
            ComboPattern::DiamondBlack => diamonds == 1 && spades + clubs == 1,
            ComboPattern::TwoBlacks => spades + clubs == 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    fn cards(suits: &[Suit], rank: Rank) -> Vec<Card> {
        suits.iter().map(|&s| Card::new(s, rank)).collect()
    }

    #[test]
    fn test_four_kings() {
        let kings = cards(
            &[Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs],
            Rank::King,
        );
        assert!(ComboPattern::FourKings.matches(&kings));
        // Same suits, wrong rank.
        let queens = cards(
            &[Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs],
            Rank::Queen,
        );
        assert!(!ComboPattern::FourKings.matches(&queens));
        // Double-deck kings without all four suits.
        let dup = cards(
            &[Suit::Spades, Suit::Spades, Suit::Clubs, Suit::Clubs],
            Rank::King,
        );
        assert!(!ComboPattern::FourKings.matches(&dup));
    }

    #[test]
    fn test_four_of_a_kind_needs_all_suits() {
        let all = cards(
            &[Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs],
            Rank::Nine,
        );
        assert!(ComboPattern::FourOfAKind.matches(&all));

        let dup = cards(
            &[Suit::Spades, Suit::Spades, Suit::Clubs, Suit::Clubs],
            Rank::Nine,
        );
        assert!(!ComboPattern::FourOfAKind.matches(&dup));
    }

    #[test]
    fn test_three_with_diamond() {
        let with = cards(&[Suit::Diamonds, Suit::Spades, Suit::Clubs], Rank::Five);
        assert!(ComboPattern::ThreeWithDiamond.matches(&with));

        let without = cards(&[Suit::Hearts, Suit::Spades, Suit::Clubs], Rank::Five);
        assert!(!ComboPattern::ThreeWithDiamond.matches(&without));
    }

    #[test]
    fn test_heart_both_blacks() {
        let trio = cards(&[Suit::Hearts, Suit::Spades, Suit::Clubs], Rank::Five);
        assert!(ComboPattern::HeartBothBlacks.matches(&trio));

        // Double-deck: heart plus two spades is not heart+both blacks.
        let dup = cards(&[Suit::Hearts, Suit::Spades, Suit::Spades], Rank::Five);
        assert!(!ComboPattern::HeartBothBlacks.matches(&dup));
    }

    #[test]
    fn test_pairs() {
        let rank = Rank::Eight;
        let hd = cards(&[Suit::Hearts, Suit::Diamonds], rank);
        let hb = cards(&[Suit::Hearts, Suit::Clubs], rank);
        let db = cards(&[Suit::Diamonds, Suit::Spades], rank);
        let bb = cards(&[Suit::Spades, Suit::Clubs], rank);
        let bb_dup = cards(&[Suit::Spades, Suit::Spades], rank);
        let hh = cards(&[Suit::Hearts, Suit::Hearts], rank);
        let dd = cards(&[Suit::Diamonds, Suit::Diamonds], rank);

        assert!(ComboPattern::HeartDiamond.matches(&hd));
        assert!(ComboPattern::HeartBlack.matches(&hb));
        assert!(ComboPattern::DiamondBlack.matches(&db));
        assert!(ComboPattern::TwoBlacks.matches(&bb));
        // Duplicate blacks from a double deck still count.
        assert!(ComboPattern::TwoBlacks.matches(&bb_dup));

        // Same-suit red pairs from a double deck match nothing.
        for p in [
            ComboPattern::HeartDiamond,
            ComboPattern::HeartBlack,
            ComboPattern::DiamondBlack,
            ComboPattern::TwoBlacks,
        ] {
            assert!(!p.matches(&hh));
            assert!(!p.matches(&dd));
        }
    }

    #[test]
    fn test_arity_mismatch_never_matches() {
        let pair = cards(&[Suit::Spades, Suit::Clubs], Rank::Four);
        assert!(!ComboPattern::FourOfAKind.matches(&pair));
        assert!(!ComboPattern::ThreeWithDiamond.matches(&pair));

        let trio = cards(&[Suit::Diamonds, Suit::Spades, Suit::Clubs], Rank::Four);
        assert!(!ComboPattern::TwoBlacks.matches(&trio));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ComboPattern::FourOfAKind).unwrap();
        assert_eq!(json, "\"four_of_a_kind\"");

        let back: ComboPattern = serde_json::from_str("\"two_blacks\"").unwrap();
        assert_eq!(back, ComboPattern::TwoBlacks);
    }
}
