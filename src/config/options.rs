// src/config/options.rs
use std::time::Duration;

use super::consts::*;
use crate::stats::{ExclusionList, GroupBy};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub classify: ClassifyOptions,
    pub report: ReportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub base_url: String,
    /// Hall-of-fame listing pages to read.
    pub pages: u32,
    pub workers: usize,
    /// Sleep after each deck request; `jitter_ms` adds up to that much on top.
    pub pause: Duration,
    pub jitter_ms: u64,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            pages: DEFAULT_PAGES,
            workers: WORKERS,
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            jitter_ms: JITTER_MS,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl FetchOptions {
    /// Worker count actually used for `jobs` requests.
    pub fn effective_workers(&self, jobs: usize) -> usize {
        self.workers.clamp(1, MAX_WORKERS).min(jobs).max(1)
    }

    /// No sleeping between requests (tests, local mirrors).
    pub fn without_pause(mut self) -> Self {
        self.pause = Duration::ZERO;
        self.jitter_ms = 0;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifyOptions {
    pub group_by: GroupBy,
    pub builtin_exclusions: bool,
    /// Extra codes to drop on top of (or instead of) the built-in table.
    pub extra_exclusions: Vec<String>,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            group_by: GroupBy::Faction,
            builtin_exclusions: true,
            extra_exclusions: Vec::new(),
        }
    }
}

impl ClassifyOptions {
    pub fn exclusions(&self) -> ExclusionList {
        let mut list = if self.builtin_exclusions {
            ExclusionList::builtin()
        } else {
            ExclusionList::empty()
        };
        for code in &self.extra_exclusions {
            list.add(code.as_str(), "excluded on the command line");
        }
        list
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
    Tsv,
}

impl ReportFormat {
    /// Field separator for the tabular formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ReportFormat::Text => None,
            ReportFormat::Csv => Some(','),
            ReportFormat::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BucketSelection {
    /// Exactly these, in this order; missing ones render empty.
    Named(Vec<String>),
    /// Every bucket present, by key.
    All,
}

impl BucketSelection {
    pub fn default_for(group_by: GroupBy) -> Self {
        match group_by {
            GroupBy::Faction => BucketSelection::Named(DEFAULT_BUCKETS.iter().map(|&b| s!(b)).collect()),
            GroupBy::Type | GroupBy::All => BucketSelection::All,
        }
    }
}

impl Default for BucketSelection {
    fn default() -> Self {
        Self::default_for(GroupBy::Faction)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    pub buckets: BucketSelection,
    /// Cut each bucket after this many cards.
    pub top: Option<usize>,
}
