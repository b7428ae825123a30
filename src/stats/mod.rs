// src/stats/mod.rs
//! Usage statistics over fetched decks.
//!
//! ```text
//! DeckRecord* ─▶ UsageAggregator ─┐
//!                                 ├─▶ CardClassifier ─▶ Buckets ─▶ rank ─▶ Ranking
//! CardRecord* ────────────────────┘
//! ```
//!
//! Nothing here touches the network; every stage is a plain function of its
//! inputs so it can be driven from tests and benches with in-memory data.

pub mod aggregate;
pub mod classify;
pub mod rank;

pub use aggregate::UsageAggregator;
pub use classify::{Buckets, CardClassifier, Exclusion, ExclusionList, GroupBy, Skip};
pub use rank::{rank, rank_all, Ranked};
