// src/model.rs
//
// Value records handed between the fetch layer and the statistics layer.
// Nothing mutates a record after it is built; accumulation happens in
// `stats::UsageAggregator`.

use std::collections::HashMap;

/// One fetched deck: the hero it was built for and how many copies of each card it runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeckRecord {
    pub hero_id: String,
    pub card_usage: HashMap<String, u32>,
}

impl DeckRecord {
    pub fn new<H, I, K>(hero_id: H, usage: I) -> Self
    where
        H: Into<String>,
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        Self {
            hero_id: hero_id.into(),
            card_usage: usage.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Sum of every per-card count in this deck.
    pub fn total_cards(&self) -> u64 {
        self.card_usage.values().map(|&n| u64::from(n)).sum()
    }
}

/// One catalog entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardRecord {
    pub id: String,
    pub display_name: String,
    pub type_name: String,
    pub faction_name: String,
    /// Set when this entry is a reprint of another code.
    pub duplicate_of_id: Option<String>,
}

impl CardRecord {
    /// Empty markers count as absent; the API sends both `null` and `""`.
    pub fn is_duplicate(&self) -> bool {
        self.duplicate_of_id.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// A canonical catalog entry annotated with how often the ingested decks used it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedCard {
    pub card: CardRecord,
    pub total_uses: u64,
}

impl ClassifiedCard {
    pub fn id(&self) -> &str { &self.card.id }
    pub fn name(&self) -> &str { &self.card.display_name }
    pub fn type_name(&self) -> &str { &self.card.type_name }
    pub fn faction(&self) -> &str { &self.card.faction_name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_marker_empty_is_canonical() {
        let mut c = CardRecord { id: s!("01"), ..Default::default() };
        assert!(!c.is_duplicate());
        c.duplicate_of_id = Some(s!());
        assert!(!c.is_duplicate());
        c.duplicate_of_id = Some(s!("02"));
        assert!(c.is_duplicate());
    }

    #[test]
    fn deck_total_cards() {
        let d = DeckRecord::new("Spider-Man", [("01001", 2), ("01002", 3)]);
        assert_eq!(d.total_cards(), 5);
    }
}
