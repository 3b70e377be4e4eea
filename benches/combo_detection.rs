//! Combo detection benchmarks.
//!
//! Detection runs inside every bot decision and every combo play, so the
//! hot paths are `identify_combo` on a played subset and `find_combos`
//! over a whole hand. The dense hand below is a worst-ish case: four full
//! ranks yield dozens of candidate subsets.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tower_clash::{find_combos, identify_combo, Card, Rank, RuleTable, Suit};

fn full_rank(rank: Rank) -> impl Iterator<Item = Card> {
    Suit::ALL.into_iter().map(move |suit| Card::new(suit, rank))
}

fn bench_identify_combo(c: &mut Criterion) {
    let rules = RuleTable::standard();
    let kings: Vec<Card> = full_rank(Rank::King).collect();
    let pair = [
        Card::new(Suit::Hearts, Rank::Nine),
        Card::new(Suit::Spades, Rank::Nine),
    ];

    c.bench_function("identify_four_kings", |b| {
        b.iter(|| identify_combo(black_box(&kings), &rules))
    });
    c.bench_function("identify_pair", |b| {
        b.iter(|| identify_combo(black_box(&pair), &rules))
    });
}

fn bench_find_combos(c: &mut Criterion) {
    let rules = RuleTable::standard();

    let dense: Vec<Card> = [Rank::Nine, Rank::Ten, Rank::Jack, Rank::King]
        .into_iter()
        .flat_map(full_rank)
        .collect();
    c.bench_function("find_combos_dense_16", |b| {
        b.iter(|| find_combos(black_box(&dense), &rules))
    });

    let sparse: Vec<Card> = [
        Rank::Two,
        Rank::Four,
        Rank::Six,
        Rank::Eight,
        Rank::Ten,
        Rank::Queen,
        Rank::Ace,
    ]
    .into_iter()
    .map(|rank| Card::new(Suit::Spades, rank))
    .collect();
    c.bench_function("find_combos_sparse_7", |b| {
        b.iter(|| find_combos(black_box(&sparse), &rules))
    });
}

criterion_group!(benches, bench_identify_combo, bench_find_combos);
criterion_main!(benches);
