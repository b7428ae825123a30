// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://marvelcdb.com";
pub const BASE_URL_ENV: &str = "MCDB_BASE_URL";
pub const USER_AGENT: &str = concat!("mcdb_rank/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Scrape
pub const DEFAULT_PAGES: u32 = 3; // 30 decks per page

// Concurrency
pub const WORKERS: usize = 1; // sequential unless asked otherwise
pub const MAX_WORKERS: usize = 8;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

// Report
pub const DEFAULT_BUCKETS: &[&str] = &["Basic", "Justice", "Aggression", "Protection", "Leadership"];
