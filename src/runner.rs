// src/runner.rs
use crate::{
    config::AppOptions,
    core::Result,
    model::{CardRecord, ClassifiedCard},
    progress::Progress,
    scrape,
    source::{CardCatalog, DeckSource},
    stats::{rank_all, CardClassifier, GroupBy, Ranked, UsageAggregator},
};

/// Everything the report needs, fully ordered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub decks: u64,
    pub group_by: GroupBy,
    /// Most played first.
    pub heroes: Vec<(String, u64)>,
    /// Every bucket the classifier produced, each ranked.
    pub buckets: Ranked,
}

impl RunSummary {
    pub fn bucket(&self, key: &str) -> Option<&[ClassifiedCard]> {
        self.buckets.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_slice())
    }
}

/// listing → decks → aggregate → catalog → classify → rank.
/// Any fetch or decode failure aborts the whole run; nothing partial comes back.
pub fn run<S>(
    source: &S,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary>
where
    S: DeckSource + CardCatalog,
{
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Reading {} hall-of-fame page(s)…", opts.fetch.pages));
    }
    let ids = source.top_deck_ids(opts.fetch.pages)?;
    log::info!("{} deck ids from {} page(s)", ids.len(), opts.fetch.pages);

    let usage = scrape::collect_usage(
        source,
        &ids,
        &opts.fetch,
        progress.as_mut().map(|p| &mut **p as &mut dyn Progress),
    )?;

    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching card catalog…");
    }
    let catalog = source.cards()?;

    Ok(summarize(&usage, &catalog, opts))
}

/// The offline half of [`run`]: classify and rank an existing aggregate.
pub fn summarize(
    usage: &UsageAggregator,
    catalog: &[CardRecord],
    opts: &AppOptions,
) -> RunSummary {
    let classifier = CardClassifier::new(opts.classify.group_by, opts.classify.exclusions());
    let buckets = classifier.classify(catalog, usage);

    RunSummary {
        decks: usage.decks_ingested(),
        group_by: classifier.group_by(),
        heroes: usage.heroes_ranked(),
        buckets: rank_all(&buckets),
    }
}
