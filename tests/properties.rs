// tests/properties.rs
//
// Aggregation and ranking invariants over generated decks and catalogs.
use std::collections::HashMap;

use proptest::collection::{hash_map, vec};
use proptest::prelude::*;

use mcdb_rank::model::{CardRecord, ClassifiedCard, DeckRecord};
use mcdb_rank::stats::{rank, CardClassifier, ExclusionList, GroupBy, UsageAggregator};

const FACTIONS: &[&str] = &["Basic", "Justice", "Aggression", "Protection", "Leadership", "Hero"];

fn deck_strategy() -> impl Strategy<Value = DeckRecord> {
    (0u8..6, hash_map(0u8..30, 0u32..5, 0..10)).prop_map(|(hero, slots)| DeckRecord {
        hero_id: format!("hero{hero}"),
        card_usage: slots.into_iter().map(|(k, v)| (format!("{k:05}"), v)).collect(),
    })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<CardRecord>> {
    vec((0usize..FACTIONS.len(), prop::option::weighted(0.2, 0u8..30)), 0..30).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (f, dup))| CardRecord {
                id: format!("{i:05}"),
                display_name: format!("Card {i}"),
                type_name: "Event".to_string(),
                faction_name: FACTIONS[f].to_string(),
                duplicate_of_id: dup.map(|d| format!("{d:05}")),
            })
            .collect()
    })
}

fn aggregate(decks: &[DeckRecord]) -> UsageAggregator {
    let mut agg = UsageAggregator::new();
    agg.extend(decks);
    agg
}

proptest! {
    #[test]
    fn usage_is_conserved(decks in vec(deck_strategy(), 0..20)) {
        let agg = aggregate(&decks);
        let expected: u64 = decks.iter().map(DeckRecord::total_cards).sum();
        prop_assert_eq!(agg.total_card_uses(), expected);
        prop_assert_eq!(agg.hero_frequencies().values().sum::<u64>(), decks.len() as u64);
    }

    #[test]
    fn per_card_total_is_sum_over_decks(decks in vec(deck_strategy(), 0..20), probe in 0u8..40) {
        let agg = aggregate(&decks);
        let id = format!("{probe:05}");
        let expected: u64 = decks
            .iter()
            .map(|d| u64::from(d.card_usage.get(&id).copied().unwrap_or(0)))
            .sum();
        prop_assert_eq!(agg.total_uses_of(&id), expected);
    }

    #[test]
    fn ingestion_order_is_irrelevant(decks in vec(deck_strategy(), 1..20), k in 0usize..20) {
        let forward = aggregate(&decks);

        let mut rotated = decks.clone();
        rotated.rotate_left(k % decks.len());
        let mut reversed = decks.clone();
        reversed.reverse();

        prop_assert_eq!(&forward, &aggregate(&rotated));
        prop_assert_eq!(&forward, &aggregate(&reversed));
    }

    #[test]
    fn reprints_never_classified_and_partition_is_complete(
        catalog in catalog_strategy(),
        decks in vec(deck_strategy(), 0..10),
    ) {
        let agg = aggregate(&decks);
        let out = CardClassifier::new(GroupBy::Faction, ExclusionList::builtin()).classify(&catalog, &agg);

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (key, cards) in &out {
            for c in cards {
                prop_assert!(!c.card.is_duplicate());
                prop_assert_eq!(c.faction(), key.as_str());
                prop_assert_eq!(c.total_uses, agg.total_uses_of(c.id()));
                *seen.entry(c.id()).or_default() += 1;
            }
        }

        let expected: Vec<&str> = catalog
            .iter()
            .filter(|c| !c.is_duplicate() && c.id != "13020")
            .map(|c| c.id.as_str())
            .collect();
        prop_assert_eq!(seen.len(), expected.len());
        for id in expected {
            prop_assert_eq!(seen.get(id).copied(), Some(1));
        }
    }

    #[test]
    fn ranking_is_descending_and_stable(uses in vec(0u64..4, 0..40)) {
        let bucket: Vec<ClassifiedCard> = uses
            .iter()
            .enumerate()
            .map(|(i, &u)| ClassifiedCard {
                card: CardRecord { id: format!("{i:05}"), ..Default::default() },
                total_uses: u,
            })
            .collect();

        let ranked = rank(&bucket);
        prop_assert_eq!(ranked.len(), bucket.len());

        for w in ranked.windows(2) {
            prop_assert!(w[0].total_uses >= w[1].total_uses);
            if w[0].total_uses == w[1].total_uses {
                // ids encode input position
                prop_assert!(w[0].id() < w[1].id());
            }
        }
    }
}
