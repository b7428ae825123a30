// src/core/error.rs
//
// Every failure is fatal for the run; callers propagate with `?`
// and the binary turns the first one into the exit report.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or non-2xx status.
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Payload arrived but doesn't have the expected shape.
    #[error("could not decode {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn is_fetch(&self) -> bool {
        matches!(self, Error::Fetch { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }
}
