// src/core/scanner/utils.rs
use crate::core::scanner::ScanOptions;
use crate::utils::is_hidden;
use anyhow::{Result, bail};
use std::env;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const NOTE_SUFFIX: &[u8] = b".md";

/// Makes `dir` absolute and checks that it is a directory.
///
/// # Errors
///
/// Fails when the current directory cannot be determined or `dir` does not
/// name an existing directory.
pub fn resolve_root(dir: &Path) -> Result<PathBuf> {
    let absolute_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    };

    if !absolute_dir.is_dir() {
        bail!("Notes directory not found: {}", absolute_dir.display());
    }
    Ok(absolute_dir)
}

/// Walks `root` in file-name order, pruning excluded entries.
pub fn walk(
    root: &Path,
    options: &ScanOptions,
) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| !should_exclude(e, options))
}

/// Decides whether an entry (and, for directories, everything below it) is
/// left out of the walk. The root is always kept.
pub fn should_exclude(entry: &DirEntry, options: &ScanOptions) -> bool {
    if entry.depth() == 0 {
        return false;
    }

    if options.skip_hidden && is_hidden(entry) {
        return true;
    }

    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| options.exclude_dirs.iter().any(|dir| dir == name))
}

pub fn is_note_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && entry.file_name().as_encoded_bytes().ends_with(NOTE_SUFFIX)
}
