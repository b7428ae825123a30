// src/specs/mod.rs
//! # Page and payload specs
//!
//! One module per remote resource. Each spec knows *where* a resource lives
//! (path builder) and *how to read it* (pure `parse_*` / `decode` over the
//! response text), plus a thin `fetch*` that glues the two with `core::net`.
//!
//! ## What lives here
//! - **Hall-of-fame listing** HTML → ordered deck ids (`halloffame`).
//! - **Public decklist** JSON → `DeckRecord` (`decklist`).
//! - **Card catalog** JSON → `Vec<CardRecord>` (`cards`).
//!
//! ## What does **not** live here
//! - Counting, dedup policy or ranking (`stats`).
//! - Scheduling of requests, politeness pauses, worker pools (`scrape`).
//!
//! ## Testing notes
//! Parsers are pure, so tests feed captured snippets straight in; nothing here
//! needs the network to be tested.
pub mod cards;
pub mod decklist;
pub mod halloffame;

use serde::{Deserialize, Deserializer};

/// Explicit `null` reads as `""`, same as a missing key under `#[serde(default)]`.
fn null_as_empty<'de, D>(de: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}
