// tests/common/mod.rs
//
// In-memory stand-in for the site, shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use mcdb_rank::model::{CardRecord, DeckRecord};
use mcdb_rank::source::{CardCatalog, DeckSource};
use mcdb_rank::{Error, Result};

pub fn decode_error(what: &str) -> Error {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    Error::Decode { what: what.to_string(), source }
}

pub fn card(id: &str, faction: &str, type_name: &str, dup: Option<&str>) -> CardRecord {
    CardRecord {
        id: id.to_string(),
        display_name: format!("Card {id}"),
        type_name: type_name.to_string(),
        faction_name: faction.to_string(),
        duplicate_of_id: dup.map(str::to_string),
    }
}

pub fn deck(hero: &str, usage: &[(&str, u32)]) -> DeckRecord {
    DeckRecord::new(hero, usage.iter().map(|&(k, v)| (k, v)))
}

#[derive(Default)]
pub struct FakeSite {
    pub pages: Vec<Vec<String>>,
    pub decks: HashMap<String, DeckRecord>,
    pub cards: Vec<CardRecord>,
    pub broken_deck: Option<String>,
    pub deck_calls: AtomicUsize,
    pub catalog_fetched: AtomicBool,
}

impl FakeSite {
    /// One listing page per chunk of `per_page` decks, ids "1", "2", …
    pub fn with_decks(decks: Vec<DeckRecord>, per_page: usize, cards: Vec<CardRecord>) -> Self {
        let ids: Vec<String> = (1..=decks.len()).map(|i| i.to_string()).collect();
        let pages = ids.chunks(per_page.max(1)).map(|c| c.to_vec()).collect();
        let decks = ids.into_iter().zip(decks).collect();
        Self { pages, decks, cards, ..Default::default() }
    }
}

impl DeckSource for FakeSite {
    fn top_deck_ids(&self, pages: u32) -> Result<Vec<String>> {
        Ok(self.pages.iter().take(pages as usize).flatten().cloned().collect())
    }

    fn deck(&self, id: &str) -> Result<DeckRecord> {
        self.deck_calls.fetch_add(1, Ordering::SeqCst);
        if self.broken_deck.as_deref() == Some(id) {
            return Err(decode_error(&format!("decklist {id}")));
        }
        self.decks
            .get(id)
            .cloned()
            .ok_or_else(|| decode_error(&format!("decklist {id}")))
    }
}

impl CardCatalog for FakeSite {
    fn cards(&self) -> Result<Vec<CardRecord>> {
        self.catalog_fetched.store(true, Ordering::SeqCst);
        Ok(self.cards.clone())
    }
}
