// src/scrape.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc, atomic::{ AtomicBool, AtomicUsize, Ordering }},
};

use crate::{
    config::FetchOptions,
    core::{ Error, Result },
    model::DeckRecord,
    progress::Progress,
    source::DeckSource,
    stats::UsageAggregator,
};

/// Fetch every deck in `ids` and fold it into one aggregate.
///
/// Workers only fetch; this thread is the sole consumer and owns the
/// aggregator, so ingestion needs no locking. The first failure raises the
/// cancel flag, workers stop picking up new ids, and the error is returned.
pub fn collect_usage(
    source: &dyn DeckSource,
    ids: &[String],
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<UsageAggregator> {

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    let workers = opts.effective_workers(ids.len());
    log::info!("Fetching {} decks with {} worker(s)", ids.len(), workers);

    type Fetched = (usize, Result<DeckRecord>);

    let next = AtomicUsize::new(0);
    let cancel = AtomicBool::new(false);
    let (res_tx, res_rx) = mpsc::channel::<Fetched>();

    let outcome = thread::scope(|scope| {
        // Spawn workers
        for _ in 0..workers {
            let tx = res_tx.clone();
            let (next, cancel) = (&next, &cancel);

            scope.spawn(move || {
                loop {
                    if cancel.load(Ordering::Relaxed) {
                        break;
                    }
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    if i >= ids.len() {
                        break;
                    }
                    let result = source.deck(&ids[i]);
                    let failed = result.is_err();
                    if failed {
                        cancel.store(true, Ordering::Relaxed);
                    }
                    if tx.send((i, result)).is_err() || failed {
                        break;
                    }
                    pause(opts, i);
                }
            });
        }
        drop(res_tx); // this thread is sole receiver now

        // Aggregate results
        let mut agg = UsageAggregator::new();
        for _ in 0..ids.len() {
            let Ok((i, result)) = res_rx.recv() else { break };
            match result {
                Ok(deck) => {
                    agg.ingest(&deck);
                    log::debug!("Deck {}: {} ({} cards)", ids[i], deck.hero_id, deck.total_cards());
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&ids[i], &deck.hero_id);
                    }
                }
                Err(e) => {
                    cancel.store(true, Ordering::Relaxed);
                    log::error!("Deck {}: {e}", ids[i]);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&ids[i], &e.to_string());
                    }
                    return Err(e);
                }
            }
        }
        Ok::<_, Error>(agg)
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    outcome
}

fn pause(opts: &FetchOptions, i: usize) {
    let jitter = if opts.jitter_ms == 0 { 0 } else { (i as u64) % opts.jitter_ms };
    let wait = opts.pause + Duration::from_millis(jitter);
    if !wait.is_zero() {
        thread::sleep(wait); // be polite
    }
}
