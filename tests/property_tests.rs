//! Randomized invariant tests over the public API.
//!
//! The engine's core guarantees are stated here as properties: cards are
//! conserved by every operation, draws never fail (exhaustion reports a
//! partial outcome), combo detection agrees with combo classification,
//! and rule tables survive JSON round trips.

use proptest::prelude::*;

use tower_clash::rules::loader;
use tower_clash::{
    find_combos, identify_combo, Card, Game, GameState, GreedyBot, PlayerId, Rank, RuleTable, Suit,
};

fn arb_card() -> impl Strategy<Value = Card> {
    (0..Suit::ALL.len(), 0..Rank::ALL.len())
        .prop_map(|(s, r)| Card::new(Suit::ALL[s], Rank::ALL[r]))
}

fn arb_hand() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(arb_card(), 0..14)
}

proptest! {
    /// Bot-driven games never create or destroy cards, and any winner is
    /// at or past the goal.
    #[test]
    fn prop_games_conserve_cards(seed in any::<u64>()) {
        let mut game = Game::standard(&["Ada", "Bea"], seed).unwrap();
        GreedyBot::new().play_game(&mut game, 120).unwrap();

        prop_assert_eq!(game.state().card_count(), game.state().total_cards());
        if let Some(winner) = game.winner() {
            prop_assert!(game.state().steps(winner) >= 20);
        }
    }

    /// Draw requests of any size are non-fatal: short piles produce a
    /// partial outcome flagged `exhausted`, and no card is lost.
    #[test]
    fn prop_draws_never_fail(count in 0u32..120) {
        let mut state = GameState::new(&["Ada", "Bea"], 1, 99);
        let p0 = PlayerId::new(0);

        let outcome = state.draw_into_hand(p0, count, false);

        prop_assert_eq!(state.card_count(), 52);
        if count <= 52 {
            prop_assert_eq!(outcome.count() as u32, count);
            prop_assert!(!outcome.exhausted);
        } else {
            prop_assert_eq!(outcome.count(), 52);
            prop_assert!(outcome.exhausted);
        }
    }

    /// Every candidate from `find_combos` is a same-rank multiset subset
    /// of the hand and classifies to the same combo id.
    #[test]
    fn prop_candidates_classify_consistently(hand in arb_hand()) {
        let rules = RuleTable::standard();

        for candidate in find_combos(&hand, &rules) {
            let def = identify_combo(&candidate.cards, &rules).unwrap();
            prop_assert_eq!(&def.id, &candidate.definition.id);
            prop_assert_eq!(candidate.cards.len(), def.required_count);

            let rank = candidate.cards[0].rank;
            for card in &candidate.cards {
                prop_assert_eq!(card.rank, rank);
                let need = candidate.cards.iter().filter(|c| *c == card).count();
                let have = hand.iter().filter(|c| *c == card).count();
                prop_assert!(have >= need, "candidate uses cards the hand lacks");
            }
        }
    }

    /// Detection is a pure function of the hand.
    #[test]
    fn prop_detection_is_deterministic(hand in arb_hand()) {
        let rules = RuleTable::standard();

        let a = find_combos(&hand, &rules);
        let b = find_combos(&hand, &rules);

        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            prop_assert_eq!(&x.definition.id, &y.definition.id);
            prop_assert_eq!(&x.cards, &y.cards);
        }
    }

    /// Mixed-rank subsets never classify.
    #[test]
    fn prop_mixed_ranks_never_classify(card in arb_card(), other in arb_card()) {
        prop_assume!(card.rank != other.rank);
        let rules = RuleTable::standard();

        prop_assert!(identify_combo(&[card, other], &rules).is_err());
    }

    /// Valid tables survive a JSON round trip unchanged.
    #[test]
    fn prop_rule_tables_round_trip(goal in 1u32..200, jackpot in 1usize..13, refill in 0u32..20) {
        let mut table = RuleTable::standard();
        table.victory.goal_steps = goal;
        table.diamonds.jackpot.threshold = jackpot;
        table.diamonds.hoarding.refill = refill;

        let json = serde_json::to_string(&table).unwrap();
        let loaded = loader::from_json_str(&json).unwrap();

        prop_assert_eq!(loaded, table);
    }
}
