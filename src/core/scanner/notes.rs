// src/core/scanner/notes.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::calendar::Calendar;
use crate::core::extract::tally_note;
use crate::core::scanner::ScanOptions;
use crate::core::scanner::utils::{is_note_file, resolve_root, walk};
use crate::models::{ScanReport, UndatedPolicy};

/// Scans every note under `dir` and buckets its open tasks.
///
/// # Arguments
///
/// * `dir` - The vault root
/// * `options` - Which directories to leave out of the walk
/// * `calendar` - Date windows relative to "today"
/// * `policy` - Where undated tasks end up
///
/// # Returns
///
/// * `Ok(ScanReport)` - Vault counters and the bucketed tasks
///
/// # Errors
///
/// Fails only when `dir` is not an existing directory. Notes that cannot be
/// read are logged, counted in `unreadable_notes` and skipped.
#[inline]
pub fn scan_vault(
    dir: &Path,
    options: &ScanOptions,
    calendar: &Calendar,
    policy: UndatedPolicy,
) -> Result<ScanReport> {
    let root = resolve_root(dir)?;
    let mut report = ScanReport::new();

    for entry in walk(&root, options) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        if entry.depth() > 0 && entry.file_type().is_dir() {
            report.stats.folders = report.stats.folders.saturating_add(1);
            continue;
        }
        if !is_note_file(&entry) {
            continue;
        }

        report.stats.notes = report.stats.notes.saturating_add(1);

        let path = entry.path();
        match read_note(path) {
            Ok(content) => tally_note(&content, calendar, policy, &mut report),
            Err(err) => {
                warn!("{err:#}");
                report.stats.unreadable_notes = report.stats.unreadable_notes.saturating_add(1);
            }
        }
    }

    debug!(
        notes = report.stats.notes,
        open = report.stats.open_tasks,
        listed = report.buckets.len(),
        "Vault scan finished"
    );
    Ok(report)
}

fn read_note(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read note: {}", path.display()))
}
