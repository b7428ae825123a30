// src/progress.rs
/// Progress reporting for the deck fan-out.
/// The CLI prints to stderr; tests pass `None`, `NullProgress` or `RecordingProgress`.
pub trait Progress {
    /// Called at the start with the number of decks to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One deck fetched and ingested.
    fn item_done(&mut self, _deck_id: &str, _hero: &str) {}

    /// One deck failed; the run is about to abort.
    fn item_failed(&mut self, _deck_id: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Records every callback; handy in tests.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub done: Vec<String>,
    pub failed: Vec<String>,
    pub lines: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn item_done(&mut self, deck_id: &str, _hero: &str) { self.done.push(s!(deck_id)); }
    fn item_failed(&mut self, deck_id: &str, _err: &str) { self.failed.push(s!(deck_id)); }
    fn finish(&mut self) { self.finished = true; }
}
