//! Combo detection: classify a played subset, or enumerate a whole hand.
//!
//! Classification walks the rule table's combo list in declared order and
//! takes the first match, so specific patterns must be listed before the
//! general ones they overlap (`four_kings` before `four_of_a_kind`).
//! Enumeration is deterministic: ranks in rank order, cards within a rank
//! in card order, subsets in lexicographic index order.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Card, Rank};
use crate::error::GameError;
use crate::rules::{ComboDefinition, RuleTable};

/// A playable subset found in a hand, paired with the combo it scores as.
#[derive(Clone, Debug)]
pub struct ComboCandidate<'a> {
    pub definition: &'a ComboDefinition,
    pub cards: SmallVec<[Card; 4]>,
}

/// First table entry whose size and pattern both match.
fn first_match<'a>(cards: &[Card], rules: &'a RuleTable) -> Option<&'a ComboDefinition> {
    rules
        .combos
        .iter()
        .find(|def| def.required_count == cards.len() && def.pattern.matches(cards))
}

/// Classify a played subset against the rule table.
///
/// The subset must be non-empty, share a single rank, and match some
/// combo's size and suit pattern; anything else is [`GameError::InvalidCombo`].
pub fn identify_combo<'a>(
    cards: &[Card],
    rules: &'a RuleTable,
) -> Result<&'a ComboDefinition, GameError> {
    if cards.is_empty() {
        return Err(GameError::invalid_combo("no cards played"));
    }
    let rank = cards[0].rank;
    if cards.iter().any(|c| c.rank != rank) {
        return Err(GameError::invalid_combo(
            "combo cards must share a single rank",
        ));
    }
    first_match(cards, rules).ok_or_else(|| {
        GameError::invalid_combo(format!(
            "{} card(s) of rank {rank} match no combo",
            cards.len()
        ))
    })
}

/// Enumerate every playable combo subset in a hand.
///
/// Each subset is attributed to the first combo it matches, exactly as
/// [`identify_combo`] would classify it. Physical duplicates from a double
/// deck can produce identical subsets; those are reported once. The result
/// order is deterministic for a given hand and table.
#[must_use]
pub fn find_combos<'a>(hand: &[Card], rules: &'a RuleTable) -> Vec<ComboCandidate<'a>> {
    let mut by_rank: FxHashMap<Rank, Vec<Card>> = FxHashMap::default();
    for &card in hand {
        by_rank.entry(card.rank).or_default().push(card);
    }

    let mut sizes: Vec<usize> = rules.combos.iter().map(|c| c.required_count).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.dedup();

    let mut found: Vec<ComboCandidate<'a>> = Vec::new();
    for rank in Rank::ALL {
        let Some(group) = by_rank.get_mut(&rank) else {
            continue;
        };
        group.sort_unstable();
        for &size in &sizes {
            if group.len() < size {
                continue;
            }
            let mut subsets = Vec::new();
            let mut scratch = SmallVec::new();
            push_subsets(group, size, 0, &mut scratch, &mut subsets);
            for cards in subsets {
                let Some(definition) = first_match(&cards, rules) else {
                    continue;
                };
                let duplicate = found
                    .iter()
                    .any(|c| c.definition.id == definition.id && c.cards == cards);
                if !duplicate {
                    found.push(ComboCandidate { definition, cards });
                }
            }
        }
    }
    found
}

/// Append every `size`-subset of `group[start..]` extending `current`.
fn push_subsets(
    group: &[Card],
    size: usize,
    start: usize,
    current: &mut SmallVec<[Card; 4]>,
    out: &mut Vec<SmallVec<[Card; 4]>>,
) {
    if current.len() == size {
        out.push(current.clone());
        return;
    }
    let needed = size - current.len();
    if group.len() < needed {
        return;
    }
    for i in start..=(group.len() - needed) {
        current.push(group[i]);
        push_subsets(group, size, i + 1, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    fn c(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn kings() -> [Card; 4] {
        [
            c(Suit::Spades, Rank::King),
            c(Suit::Hearts, Rank::King),
            c(Suit::Diamonds, Rank::King),
            c(Suit::Clubs, Rank::King),
        ]
    }

    #[test]
    fn test_identify_four_kings_beats_four_of_a_kind() {
        let rules = RuleTable::standard();
        let def = identify_combo(&kings(), &rules).unwrap();
        assert_eq!(def.id, "four_kings");

        let fours = [
            c(Suit::Spades, Rank::Four),
            c(Suit::Hearts, Rank::Four),
            c(Suit::Diamonds, Rank::Four),
            c(Suit::Clubs, Rank::Four),
        ];
        let def = identify_combo(&fours, &rules).unwrap();
        assert_eq!(def.id, "four_of_a_kind");
    }

    #[test]
    fn test_identify_each_standard_pair_and_triple() {
        let rules = RuleTable::standard();
        let cases: [(&[Card], &str); 6] = [
            (
                &[
                    c(Suit::Spades, Rank::Nine),
                    c(Suit::Clubs, Rank::Nine),
                    c(Suit::Diamonds, Rank::Nine),
                ],
                "three_with_diamond",
            ),
            (
                &[
                    c(Suit::Hearts, Rank::Nine),
                    c(Suit::Spades, Rank::Nine),
                    c(Suit::Clubs, Rank::Nine),
                ],
                "heart_both_blacks",
            ),
            (
                &[c(Suit::Hearts, Rank::Two), c(Suit::Diamonds, Rank::Two)],
                "heart_diamond",
            ),
            (
                &[c(Suit::Hearts, Rank::Two), c(Suit::Clubs, Rank::Two)],
                "heart_black",
            ),
            (
                &[c(Suit::Diamonds, Rank::Two), c(Suit::Spades, Rank::Two)],
                "diamond_black",
            ),
            (
                &[c(Suit::Spades, Rank::Two), c(Suit::Clubs, Rank::Two)],
                "two_blacks",
            ),
        ];
        for (cards, expected) in cases {
            let def = identify_combo(cards, &rules).unwrap();
            assert_eq!(def.id, expected, "cards {cards:?}");
        }
    }

    #[test]
    fn test_identify_double_deck_spade_pair() {
        let rules = RuleTable::standard();
        let pair = [c(Suit::Spades, Rank::Seven), c(Suit::Spades, Rank::Seven)];
        assert_eq!(identify_combo(&pair, &rules).unwrap().id, "two_blacks");
    }

    #[test]
    fn test_identify_rejects_empty_and_mixed_rank() {
        let rules = RuleTable::standard();

        let err = identify_combo(&[], &rules).unwrap_err();
        assert!(matches!(err, GameError::InvalidCombo { .. }));

        let mixed = [c(Suit::Spades, Rank::Two), c(Suit::Clubs, Rank::Three)];
        let err = identify_combo(&mixed, &rules).unwrap_err();
        assert!(err.to_string().contains("single rank"));
    }

    #[test]
    fn test_identify_rejects_unmatched_subsets() {
        let rules = RuleTable::standard();

        // No combo has arity 1.
        let single = [c(Suit::Hearts, Rank::Ace)];
        assert!(identify_combo(&single, &rules).is_err());

        // Two hearts (double deck) match nothing.
        let hearts = [c(Suit::Hearts, Rank::Ace), c(Suit::Hearts, Rank::Ace)];
        assert!(identify_combo(&hearts, &rules).is_err());

        // Two diamonds match nothing either.
        let diamonds = [c(Suit::Diamonds, Rank::Ace), c(Suit::Diamonds, Rank::Ace)];
        assert!(identify_combo(&diamonds, &rules).is_err());
    }

    #[test]
    fn test_find_combos_enumerates_all_king_subsets() {
        let rules = RuleTable::standard();
        let found = find_combos(&kings(), &rules);

        // 1 four-subset + 4 triples + 6 pairs, every one a standard combo.
        assert_eq!(found.len(), 11);
        assert_eq!(found[0].definition.id, "four_kings");

        let triples = found
            .iter()
            .filter(|c| c.cards.len() == 3)
            .map(|c| c.definition.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            triples,
            [
                "three_with_diamond",
                "heart_both_blacks",
                "three_with_diamond",
                "three_with_diamond",
            ]
        );
    }

    #[test]
    fn test_find_combos_dedups_double_deck_duplicates() {
        let rules = RuleTable::standard();
        let hand = [
            c(Suit::Spades, Rank::King),
            c(Suit::Spades, Rank::King),
            c(Suit::Clubs, Rank::King),
        ];
        let found = find_combos(&hand, &rules);

        // Spade+spade once, spade+club once (not once per physical copy).
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|c| c.definition.id == "two_blacks"));
    }

    #[test]
    fn test_find_combos_never_mixes_ranks() {
        let rules = RuleTable::standard();
        let hand = [
            c(Suit::Spades, Rank::Two),
            c(Suit::Clubs, Rank::Three),
            c(Suit::Hearts, Rank::Four),
            c(Suit::Diamonds, Rank::Five),
        ];
        assert!(find_combos(&hand, &rules).is_empty());
        assert!(find_combos(&[], &rules).is_empty());
    }

    #[test]
    fn test_find_combos_matches_identify() {
        let rules = RuleTable::standard();
        let hand = [
            c(Suit::Hearts, Rank::Nine),
            c(Suit::Spades, Rank::Nine),
            c(Suit::Diamonds, Rank::Nine),
            c(Suit::Clubs, Rank::Two),
        ];
        for candidate in find_combos(&hand, &rules) {
            let def = identify_combo(&candidate.cards, &rules).unwrap();
            assert_eq!(def.id, candidate.definition.id);
        }
    }
}
