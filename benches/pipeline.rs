// benches/pipeline.rs
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use mcdb_rank::model::{CardRecord, DeckRecord};
use mcdb_rank::stats::{rank_all, CardClassifier, UsageAggregator};

const FACTIONS: &[&str] = &["Basic", "Justice", "Aggression", "Protection", "Leadership"];

/// ~hall-of-fame sized input: 90 decks over a 3000-card catalog.
fn sample() -> (Vec<DeckRecord>, Vec<CardRecord>) {
    let cards: Vec<CardRecord> = (0..3000)
        .map(|i| CardRecord {
            id: format!("{i:05}"),
            display_name: format!("Card {i}"),
            type_name: "Event".to_string(),
            faction_name: FACTIONS[i % FACTIONS.len()].to_string(),
            duplicate_of_id: (i % 17 == 0 && i > 0).then(|| format!("{:05}", i - 1)),
        })
        .collect();

    let decks: Vec<DeckRecord> = (0..90)
        .map(|d| DeckRecord::new(
            format!("Hero {}", d % 40),
            (0..40).map(|k| (format!("{:05}", (d * 31 + k * 7) % 3000), (k % 3 + 1) as u32)),
        ))
        .collect();

    (decks, cards)
}

fn bench_pipeline(c: &mut Criterion) {
    let (decks, cards) = sample();
    let classifier = CardClassifier::default();

    c.bench_function("aggregate_90_decks", |b| {
        b.iter(|| {
            let mut agg = UsageAggregator::new();
            agg.extend(black_box(&decks));
            black_box(agg.total_card_uses())
        })
    });

    let mut agg = UsageAggregator::new();
    agg.extend(&decks);

    c.bench_function("classify_and_rank", |b| {
        b.iter(|| {
            let buckets = classifier.classify(black_box(&cards), black_box(&agg));
            black_box(rank_all(&buckets).len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
