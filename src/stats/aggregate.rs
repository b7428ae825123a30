// src/stats/aggregate.rs

use std::collections::HashMap;

use crate::model::DeckRecord;

/// Running totals for one run.
///
/// Totals are plain sums, so ingestion order never matters and two partial
/// aggregates can be combined with [`UsageAggregator::merge`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsageAggregator {
    hero_counts: HashMap<String, u64>,
    card_usage: HashMap<String, u64>,
    decks: u64,
}

impl UsageAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one deck: every card count into the per-card total, one appearance for its hero.
    pub fn ingest(&mut self, deck: &DeckRecord) {
        for (card, &count) in &deck.card_usage {
            *self.card_usage.entry(card.clone()).or_insert(0) += u64::from(count);
        }
        *self.hero_counts.entry(deck.hero_id.clone()).or_insert(0) += 1;
        self.decks += 1;
    }

    /// Fold another aggregate into this one.
    pub fn merge(&mut self, other: UsageAggregator) {
        for (card, n) in other.card_usage {
            *self.card_usage.entry(card).or_insert(0) += n;
        }
        for (hero, n) in other.hero_counts {
            *self.hero_counts.entry(hero).or_insert(0) += n;
        }
        self.decks += other.decks;
    }

    /// 0 for codes no deck used.
    pub fn total_uses_of(&self, card_id: &str) -> u64 {
        self.card_usage.get(card_id).copied().unwrap_or(0)
    }

    pub fn hero_frequencies(&self) -> &HashMap<String, u64> {
        &self.hero_counts
    }

    pub fn card_usage(&self) -> &HashMap<String, u64> {
        &self.card_usage
    }

    pub fn decks_ingested(&self) -> u64 {
        self.decks
    }

    /// Sum over every card code.
    pub fn total_card_uses(&self) -> u64 {
        self.card_usage.values().sum()
    }

    /// Heroes by deck count, most played first; ties by name so output is stable.
    pub fn heroes_ranked(&self) -> Vec<(String, u64)> {
        let mut v: Vec<(String, u64)> = self
            .hero_counts
            .iter()
            .map(|(h, &n)| (h.clone(), n))
            .collect();
        v.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        v
    }
}

impl<'a> Extend<&'a DeckRecord> for UsageAggregator {
    fn extend<T: IntoIterator<Item = &'a DeckRecord>>(&mut self, iter: T) {
        for deck in iter {
            self.ingest(deck);
        }
    }
}
