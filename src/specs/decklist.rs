// src/specs/decklist.rs
//! Public decklist API: `/api/public/decklist/{id}.json`.
//!
//! Only two fields matter: `investigator_name` (the hero) and `slots`
//! (card code → copies). Everything else in the payload is ignored.

use std::collections::HashMap;

use serde::Deserialize;

use crate::core::{net::Http, Error, Result};
use crate::model::DeckRecord;

#[derive(Debug, Deserialize)]
struct DeckPayload {
    #[serde(deserialize_with = "super::null_as_empty")]
    investigator_name: String,
    #[serde(default)]
    slots: Option<HashMap<String, u32>>,
}

pub fn path(id: &str) -> String {
    format!("/api/public/decklist/{id}.json")
}

pub fn decode(id: &str, body: &str) -> Result<DeckRecord> {
    let payload: DeckPayload = serde_json::from_str(body)
        .map_err(|source| Error::Decode { what: format!("decklist {id}"), source })?;

    Ok(DeckRecord {
        hero_id: payload.investigator_name,
        card_usage: payload.slots.unwrap_or_default(),
    })
}

pub fn fetch(http: &Http, id: &str) -> Result<DeckRecord> {
    let body = http.get_text(&path(id))?;
    decode(id, &body)
}
