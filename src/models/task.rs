// src/models/task.rs
use serde::Serialize;

/// Time-relative category an open task is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Overdue,
    Today,
    ThisWeek,
    ThisMonth,
    Undated,
}

/// An open checklist item found in a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    raw_text: String,
    bucket: Bucket,
    display_text: String,
}

impl Task {
    #[inline]
    #[must_use]
    pub const fn new(raw_text: String, bucket: Bucket, display_text: String) -> Self {
        Self {
            raw_text,
            bucket,
            display_text,
        }
    }

    /// Task body as written in the note, checkbox marker removed.
    #[inline]
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    #[inline]
    #[must_use]
    pub const fn bucket(&self) -> Bucket {
        self.bucket
    }

    /// Cleaned, markup-escaped text ready for Conky.
    #[inline]
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display_text
    }
}
