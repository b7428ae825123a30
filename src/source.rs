// src/source.rs
//
// Seams between the statistics core and the outside world.
// `MarvelCdb` is the real thing; tests plug in-memory sources instead.

use crate::config::FetchOptions;
use crate::core::{net::Http, Result};
use crate::model::{CardRecord, DeckRecord};
use crate::specs;

/// Where decks come from. Shared by reference across the worker pool.
pub trait DeckSource: Send + Sync {
    /// Deck ids from the first `pages` ranked listing pages, listing order.
    fn top_deck_ids(&self, pages: u32) -> Result<Vec<String>>;

    fn deck(&self, id: &str) -> Result<DeckRecord>;
}

/// Where the card catalog comes from.
pub trait CardCatalog: Send + Sync {
    fn cards(&self) -> Result<Vec<CardRecord>>;
}

/// MarvelCDB over HTTP.
pub struct MarvelCdb {
    http: Http,
}

impl MarvelCdb {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        Ok(Self { http: Http::new(&opts.base_url, opts.timeout)? })
    }

    pub fn base_url(&self) -> &str {
        self.http.base()
    }
}

impl DeckSource for MarvelCdb {
    fn top_deck_ids(&self, pages: u32) -> Result<Vec<String>> {
        specs::halloffame::fetch_top_deck_ids(&self.http, pages)
    }

    fn deck(&self, id: &str) -> Result<DeckRecord> {
        specs::decklist::fetch(&self.http, id)
    }
}

impl CardCatalog for MarvelCdb {
    fn cards(&self) -> Result<Vec<CardRecord>> {
        specs::cards::fetch(&self.http)
    }
}
