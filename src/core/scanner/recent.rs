// src/core/scanner/recent.rs
use anyhow::Result;
use chrono::{DateTime, Local};
use std::io;
use std::path::Path;
use tracing::warn;

use crate::core::scanner::ScanOptions;
use crate::core::scanner::utils::{is_note_file, resolve_root, walk};
use crate::models::RecentNote;

/// Lists the `limit` most recently modified notes under `dir`, newest first.
///
/// # Errors
///
/// Fails only when `dir` is not an existing directory. Notes whose metadata
/// cannot be read are logged and left out.
#[inline]
pub fn recent_notes(dir: &Path, options: &ScanOptions, limit: usize) -> Result<Vec<RecentNote>> {
    if limit == 0 {
        return Ok(Vec::new());
    }

    let root = resolve_root(dir)?;
    let mut notes = Vec::new();

    for entry in walk(&root, options) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "Skipping unreadable entry");
                continue;
            }
        };
        if !is_note_file(&entry) {
            continue;
        }

        let modified = entry
            .metadata()
            .map_err(io::Error::from)
            .and_then(|metadata| metadata.modified());
        match modified {
            Ok(time) => notes.push(RecentNote {
                path: entry.into_path(),
                modified: DateTime::<Local>::from(time),
            }),
            Err(err) => warn!(path = %entry.path().display(), error = %err, "Failed to read note metadata"),
        }
    }

    notes.sort_by(|a, b| b.modified.cmp(&a.modified));
    notes.truncate(limit);
    Ok(notes)
}
