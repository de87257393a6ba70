// src/models/recent_note.rs
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentNote {
    pub path: PathBuf,
    pub modified: DateTime<Local>,
}

impl RecentNote {
    /// File name without directories, used for display.
    #[inline]
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned())
    }
}
