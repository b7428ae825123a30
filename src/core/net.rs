// src/core/net.rs
// Blocking HTTP GET against one site. One client per run; it pools connections.

use std::time::Duration;

use reqwest::blocking::Client;

use super::error::{Error, Result};
use crate::config::consts::USER_AGENT;

pub struct Http {
    client: Client,
    base: String,
}

impl Http {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|source| Error::Fetch { url: s!(base_url), source })?;

        Ok(Self { client, base: s!(base_url.trim_end_matches('/')) })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// GET `<base><path>` and return the body. Non-2xx is an error.
    pub fn get_text(&self, path: &str) -> Result<String> {
        let full = url!(self.base, path);
        log::debug!("GET {full}");

        self.client
            .get(&full)
            .send()
            .and_then(|rs| rs.error_for_status())
            .and_then(|rs| rs.text())
            .map_err(|source| Error::Fetch { url: full, source })
    }
}
