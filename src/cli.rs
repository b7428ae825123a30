// src/cli.rs
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::config::{
    consts::{BASE_URL, BASE_URL_ENV, DEFAULT_PAGES, WORKERS},
    AppOptions, BucketSelection, ClassifyOptions, FetchOptions, ReportFormat, ReportOptions,
};
use crate::progress::Progress;
use crate::source::MarvelCdb;
use crate::stats::GroupBy;
use crate::{logging, report, runner};

#[derive(Parser, Debug)]
#[command(name = "mcdb_rank")]
#[command(about = "Rank heroes and cards by usage across MarvelCDB hall-of-fame decks", long_about = None)]
#[command(version)]
pub struct Args {
    /// Site root
    #[arg(long, env = BASE_URL_ENV, default_value = BASE_URL)]
    pub base_url: String,

    /// Hall-of-fame listing pages to read (30 decks each)
    #[arg(short, long, default_value_t = DEFAULT_PAGES, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Parallel deck requests (1 = strictly sequential)
    #[arg(short, long, default_value_t = WORKERS)]
    pub workers: usize,

    /// How cards are bucketed
    #[arg(long, value_enum, default_value_t = GroupArg::Faction)]
    pub group_by: GroupArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Bucket to print; repeat for several, order is kept
    #[arg(short, long = "bucket")]
    pub buckets: Vec<String>,

    /// Print every bucket present instead of the default list
    #[arg(long, conflicts_with = "buckets")]
    pub all_buckets: bool,

    /// Only the N most used cards per bucket
    #[arg(long)]
    pub top: Option<usize>,

    /// Extra card code to leave out; repeatable
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    /// Drop the built-in table of known catalog errors
    #[arg(long)]
    pub no_builtin_exclusions: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Warnings and errors only; no progress lines
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GroupArg { Faction, Type, All }

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg { Text, Csv, Tsv }

impl From<GroupArg> for GroupBy {
    fn from(g: GroupArg) -> Self {
        match g {
            GroupArg::Faction => GroupBy::Faction,
            GroupArg::Type => GroupBy::Type,
            GroupArg::All => GroupBy::All,
        }
    }
}

impl From<FormatArg> for ReportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Csv => ReportFormat::Csv,
            FormatArg::Tsv => ReportFormat::Tsv,
        }
    }
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let group_by = GroupBy::from(self.group_by);

        let buckets = if self.all_buckets {
            BucketSelection::All
        } else if !self.buckets.is_empty() {
            BucketSelection::Named(self.buckets.clone())
        } else {
            BucketSelection::default_for(group_by)
        };

        AppOptions {
            fetch: FetchOptions {
                base_url: self.base_url.clone(),
                pages: self.pages,
                workers: self.workers,
                ..FetchOptions::default()
            },
            classify: ClassifyOptions {
                group_by,
                builtin_exclusions: !self.no_builtin_exclusions,
                extra_exclusions: self.exclude.clone(),
            },
            report: ReportOptions {
                format: self.format.into(),
                buckets,
                top: self.top,
            },
        }
    }

    fn log_level(&self) -> Option<LevelFilter> {
        if self.quiet {
            Some(LevelFilter::Warn)
        } else if self.verbose {
            Some(LevelFilter::Debug)
        } else {
            None
        }
    }
}

/// `[k/n] deck 1771 · Doctor Strange` on stderr.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, deck_id: &str, hero: &str) {
        self.done += 1;
        eprintln!("[{}/{}] deck {deck_id} · {hero}", self.done, self.total);
    }
    fn item_failed(&mut self, deck_id: &str, err: &str) {
        eprintln!("deck {deck_id} failed: {err}");
    }
}

pub fn run() -> color_eyre::Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> color_eyre::Result<()> {
    logging::init(args.log_level());
    let opts = args.to_options();

    let source = MarvelCdb::new(&opts.fetch)?;
    log::info!("Source: {}", source.base_url());

    let mut stderr_progress = StderrProgress { total: 0, done: 0 };
    let progress: Option<&mut dyn Progress> = if args.quiet { None } else { Some(&mut stderr_progress) };

    let summary = runner::run(&source, &opts, progress)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::render(&mut out, &summary, &opts.report)?;
    Ok(())
}
