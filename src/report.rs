// src/report.rs
use std::io::{self, Write};

use crate::config::{BucketSelection, ReportOptions};
use crate::model::ClassifiedCard;
use crate::runner::RunSummary;
use crate::stats::GroupBy;

const RULE: &str = "-----";

/* ---------------- Selection ---------------- */

/// Buckets to print, in print order, already cut to `top`.
pub fn selected<'a>(summary: &'a RunSummary, opts: &'a ReportOptions) -> Vec<(&'a str, &'a [ClassifiedCard])> {
    let cut = |cards: &'a [ClassifiedCard]| match opts.top {
        Some(n) => &cards[..n.min(cards.len())],
        None => cards,
    };

    match &opts.buckets {
        BucketSelection::All => summary
            .buckets
            .iter()
            .map(|(k, v)| (k.as_str(), cut(v)))
            .collect(),
        BucketSelection::Named(names) => names
            .iter()
            .map(|name| {
                let cards = summary.bucket(name).unwrap_or(&[]);
                (name.as_str(), cut(cards))
            })
            .collect(),
    }
}

fn heading(key: &str, group_by: GroupBy) -> String {
    match group_by {
        GroupBy::Faction => format!("{} ASPECT", key.to_uppercase()),
        GroupBy::Type | GroupBy::All => format!("{} CARDS", key.to_uppercase()),
    }
}

/* ---------------- Writing ---------------- */

pub fn render<W: Write>(w: &mut W, summary: &RunSummary, opts: &ReportOptions) -> io::Result<()> {
    match opts.format.delim() {
        None => write_text(w, summary, opts),
        Some(sep) => write_table(w, summary, opts, sep),
    }
}

/// Whole report as a string.
pub fn to_report_string(summary: &RunSummary, opts: &ReportOptions) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = render(&mut buf, summary, opts);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

fn write_text<W: Write>(w: &mut W, summary: &RunSummary, opts: &ReportOptions) -> io::Result<()> {
    writeln!(w, "{RULE}")?;
    writeln!(w, "HEROES INCLUDED")?;
    writeln!(w, "{RULE}")?;
    for (hero, n) in &summary.heroes {
        writeln!(w, "{hero} appears {n} times")?;
    }

    for (key, cards) in selected(summary, opts) {
        writeln!(w, "{RULE}")?;
        writeln!(w, "{}", heading(key, summary.group_by))?;
        writeln!(w, "{RULE}")?;
        for c in cards {
            writeln!(
                w,
                "{} - {} - {} - {} appears {} times",
                c.id(), c.faction(), c.type_name(), c.name(), c.total_uses
            )?;
        }
    }
    Ok(())
}

fn write_table<W: Write>(w: &mut W, summary: &RunSummary, opts: &ReportOptions, sep: char) -> io::Result<()> {
    write_row(&mut *w, &["Hero", "Decks"], sep)?;
    for (hero, n) in &summary.heroes {
        let n = n.to_string();
        write_row(&mut *w, &[hero.as_str(), n.as_str()], sep)?;
    }
    writeln!(w)?;

    write_row(&mut *w, &["Bucket", "Code", "Faction", "Type", "Name", "Uses"], sep)?;
    for (key, cards) in selected(summary, opts) {
        for c in cards {
            let uses = c.total_uses.to_string();
            write_row(&mut *w, &[key, c.id(), c.faction(), c.type_name(), c.name(), uses.as_str()], sep)?;
        }
    }
    Ok(())
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[&str], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}
