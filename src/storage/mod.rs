// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persistent storage helpers for export snapshots
//!
//! Snapshots are named `portfolio-{locale}-{timestamp}[_{n}].{ext}`. The
//! `_{n}` suffix only appears when an earlier snapshot already took the same
//! millisecond.

use crate::export::ExportBundle;
use crate::render::OutputFormat;
use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXPORT_DIR: &str = "exports";

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S%3f";
/// Second-precision names written by earlier releases.
const TIMESTAMP_FORMAT_SECONDS: &str = "%Y%m%d%H%M%S";

/// Write `bundle` once per format into `directory` (default `exports/`).
/// Returns the written paths in format order. Existing files are never
/// overwritten.
pub fn persist_snapshot(
    bundle: &ExportBundle<'_>,
    directory: Option<&Path>,
    formats: &[OutputFormat],
) -> Result<Vec<PathBuf>> {
    let base_dir = directory
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR));
    fs::create_dir_all(&base_dir)
        .with_context(|| format!("creating export directory {}", base_dir.display()))?;

    let stem = unused_stem(&base_dir, &bundle.locale, formats);
    let mut stored = Vec::new();
    for format in formats {
        let path = base_dir.join(format!("{}.{}", stem, format.extension()));
        let content = format.serialize(bundle)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "snapshot written");
        stored.push(path);
    }
    Ok(stored)
}

/// First `portfolio-{locale}-{timestamp}[_{n}]` stem with no file in any of
/// `formats` yet.
fn unused_stem(dir: &Path, locale: &str, formats: &[OutputFormat]) -> String {
    let base = format!(
        "portfolio-{}-{}",
        locale,
        Utc::now().format(TIMESTAMP_FORMAT)
    );
    let taken = |stem: &str| {
        formats
            .iter()
            .any(|f| dir.join(format!("{}.{}", stem, f.extension())).exists())
    };

    let mut stem = base.clone();
    let mut sequence = 0u32;
    while taken(&stem) {
        sequence += 1;
        stem = format!("{}_{}", base, sequence);
    }
    stem
}

/// Creation time and sequence encoded in a snapshot file name.
fn snapshot_key(path: &Path) -> Option<(NaiveDateTime, u32)> {
    let stem = path.file_stem()?.to_str()?;
    let (_, stamp) = stem.rsplit_once('-')?;
    let (stamp, sequence) = match stamp.split_once('_') {
        Some((stamp, n)) => (stamp, n.parse().ok()?),
        None => (stamp, 0),
    };
    let created = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT_SECONDS))
        .ok()?;
    Some((created, sequence))
}

/// The newest `count` JSON snapshots in `dir`, of any locale, oldest first.
/// Ordered by the timestamp in the file name; files without one are ignored.
pub fn latest_snapshots(dir: &Path, count: usize) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(anyhow!("export directory not found: {}", dir.display()));
    }

    let mut entries: Vec<((NaiveDateTime, u32), PathBuf)> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .filter_map(|path| snapshot_key(&path).map(|key| (key, path)))
        .collect();

    entries.sort();
    if entries.len() < count {
        return Err(anyhow!(
            "not enough snapshots in {} (need {}, found {})",
            dir.display(),
            count,
            entries.len()
        ));
    }
    let start = entries.len() - count;
    Ok(entries.drain(start..).map(|(_, path)| path).collect())
}
