// src/utils.rs
use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

const DEFAULT_NOTES_DIR: &str = "Notes";

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// `~/Notes`, the vault scanned when no directory is given.
///
/// # Errors
///
/// Fails when the home directory cannot be determined.
pub fn default_notes_dir() -> Result<PathBuf> {
    home_dir().map(|home| home.join(DEFAULT_NOTES_DIR))
}

/// Expands a leading `~` or `~/` to the home directory. Other paths are
/// returned unchanged.
///
/// # Errors
///
/// Fails when the path starts with `~` and the home directory cannot be
/// determined.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => home_dir().map(|home| home.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))
}
