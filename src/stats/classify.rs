// src/stats/classify.rs
//
// Catalog entries → usage-annotated buckets.
//
// Skip order per entry:
//   1. reprint marker set (`duplicate_of_id`): never listed on its own
//   2. code listed in the exclusion table: known catalog data errors
// Everything else lands in exactly one bucket, keyed by `GroupBy`.

use std::collections::BTreeMap;

use crate::model::{CardRecord, ClassifiedCard};
use super::aggregate::UsageAggregator;

/// Bucket key → cards in catalog order.
pub type Buckets = BTreeMap<String, Vec<ClassifiedCard>>;

/// Label of the single bucket used by [`GroupBy::All`].
pub const ALL_BUCKET: &str = "All";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GroupBy {
    #[default]
    Faction,
    Type,
    All,
}

impl GroupBy {
    pub fn key<'a>(&self, card: &'a CardRecord) -> &'a str {
        match self {
            GroupBy::Faction => &card.faction_name,
            GroupBy::Type => &card.type_name,
            GroupBy::All => ALL_BUCKET,
        }
    }
}

/// A code dropped from classification although the catalog calls it canonical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exclusion {
    pub code: String,
    pub reason: String,
}

/// Hand-maintained patch table for catalog data errors. Additive: new bad
/// codes get a new row, never a new branch in the classifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExclusionList {
    entries: Vec<Exclusion>,
}

/// Known-bad catalog codes.
const BUILTIN: &[(&str, &str)] = &[
    (
        "13020",
        "Wasp's Swarm Tactics is not marked as a duplicate; decks record Ant-Man's Swarm Tactics instead",
    ),
];

impl ExclusionList {
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn builtin() -> Self {
        let mut list = Self::empty();
        for &(code, reason) in BUILTIN {
            list.add(code, reason);
        }
        list
    }

    /// Adding a code twice keeps the first reason.
    pub fn add(&mut self, code: impl Into<String>, reason: impl Into<String>) {
        let code = code.into();
        if !self.contains(&code) {
            self.entries.push(Exclusion { code, reason: reason.into() });
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn get(&self, code: &str) -> Option<&Exclusion> {
        self.entries.iter().find(|e| e.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exclusion> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Why an entry was left out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Skip<'a> {
    Duplicate { of: &'a str },
    Excluded(&'a Exclusion),
}

#[derive(Clone, Debug, Default)]
pub struct CardClassifier {
    group_by: GroupBy,
    exclusions: ExclusionList,
}

impl CardClassifier {
    pub fn new(group_by: GroupBy, exclusions: ExclusionList) -> Self {
        Self { group_by, exclusions }
    }

    pub fn group_by(&self) -> GroupBy { self.group_by }
    pub fn exclusions(&self) -> &ExclusionList { &self.exclusions }

    /// `None` when the entry is counted.
    pub fn skip_reason<'a>(&'a self, card: &'a CardRecord) -> Option<Skip<'a>> {
        if card.is_duplicate() {
            return Some(Skip::Duplicate { of: card.duplicate_of_id.as_deref().unwrap_or_default() });
        }
        self.exclusions.get(&card.id).map(Skip::Excluded)
    }

    pub fn classify(&self, catalog: &[CardRecord], usage: &UsageAggregator) -> Buckets {
        let mut buckets = Buckets::new();
        let mut duplicates = 0usize;
        let mut excluded = 0usize;

        for card in catalog {
            match self.skip_reason(card) {
                Some(Skip::Duplicate { of }) => {
                    log::trace!("skip {} (reprint of {of})", card.id);
                    duplicates += 1;
                }
                Some(Skip::Excluded(ex)) => {
                    log::debug!("skip {} ({})", card.id, ex.reason);
                    excluded += 1;
                }
                None => {
                    let total_uses = usage.total_uses_of(&card.id);
                    buckets
                        .entry(s!(self.group_by.key(card)))
                        .or_default()
                        .push(ClassifiedCard { card: card.clone(), total_uses });
                }
            }
        }

        log::debug!(
            "classified {} cards into {} buckets ({duplicates} reprints, {excluded} excluded)",
            catalog.len() - duplicates - excluded,
            buckets.len(),
        );
        buckets
    }
}
