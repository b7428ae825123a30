// src/logging.rs
// env_logger backend for the `log` macros. Lines go to stderr so stdout
// carries only the report: `[hh:mm:ss.mmm][LEVEL] msg`, time since start.
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::LevelFilter;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// reqwest/hyper are chatty at debug; an explicit `RUST_LOG` gets its way.
fn quiet_modules(rust_log_set: bool) -> &'static [(&'static str, LevelFilter)] {
    const QUIET: &[(&str, LevelFilter)] = &[("hyper", LevelFilter::Warn), ("reqwest", LevelFilter::Warn)];
    if rust_log_set { &[] } else { QUIET }
}

/// Install the logger. `RUST_LOG` decides unless `level` forces a filter.
/// Safe to call twice; the second call is ignored.
pub fn init(level: Option<LevelFilter>) {
    let _ = start();

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(l) = level {
        builder.filter_level(l);
    }
    for (module, level) in quiet_modules(std::env::var_os("RUST_LOG").is_some()) {
        builder.filter_module(module, *level);
    }

    builder
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        })
        .target(env_logger::Target::Stderr);

    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_format() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    #[test]
    fn rust_log_keeps_dependency_levels() {
        assert!(quiet_modules(true).is_empty());
        let quiet = quiet_modules(false);
        assert!(quiet.contains(&("reqwest", LevelFilter::Warn)));
        assert!(quiet.contains(&("hyper", LevelFilter::Warn)));
    }

    #[test]
    fn init_twice_is_harmless() {
        init(Some(LevelFilter::Warn));
        init(None);
        log::warn!("still alive");
    }
}
