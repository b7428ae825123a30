// src/specs/cards.rs
//! Full card catalog: `/api/public/cards/?_format=json`, one bulk call.

use serde::Deserialize;

use crate::core::{net::Http, Error, Result};
use crate::model::CardRecord;

pub const PATH: &str = "/api/public/cards/?_format=json";

#[derive(Debug, Deserialize)]
struct CardPayload {
    code: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    real_name: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    name: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    type_name: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    faction_name: String,
    #[serde(default)]
    duplicate_of_code: Option<String>,
}

impl From<CardPayload> for CardRecord {
    fn from(p: CardPayload) -> Self {
        // `real_name` is the untranslated name; fall back to `name` for odd rows
        let display_name = if p.real_name.is_empty() { p.name } else { p.real_name };
        CardRecord {
            id: p.code,
            display_name,
            type_name: p.type_name,
            faction_name: p.faction_name,
            duplicate_of_id: p.duplicate_of_code.filter(|d| !d.is_empty()),
        }
    }
}

pub fn decode(body: &str) -> Result<Vec<CardRecord>> {
    let payload: Vec<CardPayload> = serde_json::from_str(body)
        .map_err(|source| Error::Decode { what: s!("card catalog"), source })?;
    Ok(payload.into_iter().map(CardRecord::from).collect())
}

pub fn fetch(http: &Http) -> Result<Vec<CardRecord>> {
    let body = http.get_text(PATH)?;
    let cards = decode(&body)?;
    log::info!("Card catalog: {} entries", cards.len());
    Ok(cards)
}
