// src/specs/halloffame.rs
//! Hall-of-fame listing pages.
//!
//! Page 1 is `/decklists/halloffame`, page `n` is `/decklists/halloffame/{n}`.
//! Each deck row links to `/decklist/view/{id}/{slug}`; the id is all we keep.

use std::collections::HashSet;

use crate::core::{html, net::Http, Result};

const DECK_LINK: &str = "/decklist/view/";

pub fn page_path(page: u32) -> String {
    if page <= 1 {
        s!("/decklists/halloffame")
    } else {
        format!("/decklists/halloffame/{page}")
    }
}

/// Deck ids linked from one listing page, first occurrence order, no repeats.
pub fn parse_deck_ids(doc: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    html::hrefs(doc)
        .into_iter()
        .filter_map(deck_id_from_href)
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// `…/decklist/view/1771/doctor-strange…` → `1771`
fn deck_id_from_href(href: &str) -> Option<String> {
    let href = html::decode_entities(href);
    let at = href.find(DECK_LINK)?;
    let rest = &href[at + DECK_LINK.len()..];
    let id = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("")
        .trim();
    (!id.is_empty()).then(|| s!(id))
}

/// Ids from pages `1..=pages`, listing order, each deck once.
pub fn fetch_top_deck_ids(http: &Http, pages: u32) -> Result<Vec<String>> {
    collect_pages(pages, |path| http.get_text(path))
}

/// Walks listing pages through `get_page`; a deck seen on an earlier page is skipped.
pub fn collect_pages<F>(pages: u32, mut get_page: F) -> Result<Vec<String>>
where
    F: FnMut(&str) -> Result<String>,
{
    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for page in 1..=pages {
        let doc = get_page(&page_path(page))?;
        let found = parse_deck_ids(&doc);
        if found.is_empty() {
            log::warn!("Hall of fame page {page}: no deck links found");
        } else {
            log::info!("Hall of fame page {page}: {} decks", found.len());
        }
        ids.extend(found.into_iter().filter(|id| seen.insert(id.clone())));
    }
    Ok(ids)
}
