// src/core/extract.rs
use crate::core::calendar::{Calendar, find_date};
use crate::core::display::display_text;
use crate::models::{ScanReport, Task, UndatedPolicy};

const OPEN_MARKER: &str = "- [ ]";
const DONE_MARKER: &str = "- [x]";

/// What a single note line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Unchecked item, with its body.
    Open(&'a str),
    Completed,
    Other,
}

#[inline]
#[must_use]
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if let Some(body) = line.strip_prefix(OPEN_MARKER) {
        return LineKind::Open(body.trim_start());
    }
    if line.starts_with(DONE_MARKER) {
        return LineKind::Completed;
    }
    LineKind::Other
}

/// Builds a task from an open item body. `None` when its date falls
/// outside every window.
#[inline]
#[must_use]
pub fn build_task(body: &str, calendar: &Calendar) -> Option<Task> {
    let token = find_date(body);
    let bucket = calendar.classify(token.as_ref().and_then(|t| t.date))?;
    let display = display_text(body, token.as_ref().map(|t| t.text));
    Some(Task::new(body.to_owned(), bucket, display))
}

/// Feeds every line of one note into `report`.
#[inline]
pub fn tally_note(
    content: &str,
    calendar: &Calendar,
    policy: UndatedPolicy,
    report: &mut ScanReport,
) {
    for line in content.lines() {
        match classify_line(line) {
            LineKind::Open(body) => {
                report.stats.open_tasks = report.stats.open_tasks.saturating_add(1);
                let listed = build_task(body, calendar)
                    .is_some_and(|task| report.buckets.insert(task, policy));
                if !listed {
                    report.stats.dropped_tasks = report.stats.dropped_tasks.saturating_add(1);
                }
            }
            LineKind::Completed => {
                report.stats.completed_tasks = report.stats.completed_tasks.saturating_add(1);
            }
            LineKind::Other => {}
        }
    }
}
