// src/render/report.rs
use crate::models::{RecentNote, ScanReport, Task, VaultStats};
use crate::render::markup::{
    ACCENT, ALIGN_CENTER, ALIGN_RIGHT, BULLET, HIGHLIGHT, Markup, PLAIN, RESET, escape,
    spaced_title,
};

const DASHBOARD_CAP: usize = 5;
const AGENDA_CAP: usize = 10;
const TIME_FORMAT: &str = "%I:%M %p";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    /// Plain rule, `• task` entries.
    Dashboard,
    /// Accent-colored rule and bullets, highlighted entries.
    Agenda,
}

/// One titled list of tasks.
#[derive(Debug, Clone, Copy)]
pub struct BlockSpec<'a> {
    pub title: &'a str,
    /// Label for the `Total <label> N` line, shown when the list is not empty.
    pub total_label: Option<&'a str>,
    pub cap: usize,
    pub style: BlockStyle,
}

/// Header, rule, then at most `spec.cap` entries, or a "no ..." line when
/// `tasks` is empty.
#[inline]
pub fn render_block(markup: &mut Markup, spec: &BlockSpec<'_>, tasks: &[Task]) {
    markup.header(spec.title);
    match spec.style {
        BlockStyle::Dashboard => markup.rule(),
        BlockStyle::Agenda => markup.accent_rule(),
    }

    if tasks.is_empty() {
        let placeholder = spaced_title(&format!("no {}", spec.title));
        match spec.style {
            BlockStyle::Dashboard => markup.line(&placeholder),
            BlockStyle::Agenda => {
                markup.line(&format!("{ACCENT}{ALIGN_CENTER}{placeholder}{RESET}"));
            }
        }
        return;
    }

    if let Some(label) = spec.total_label {
        markup.line(&format!("{HIGHLIGHT} Total {label} {} {PLAIN}", tasks.len()));
    }
    for task in tasks.iter().take(spec.cap) {
        let text = task.display_text();
        match spec.style {
            BlockStyle::Dashboard => markup.line(&format!("{BULLET} {text}")),
            BlockStyle::Agenda => {
                markup.line(&format!("{ACCENT}{BULLET} {HIGHLIGHT}{text}{RESET}"));
            }
        }
    }
}

/// The full widget: optional vault stats and recent notes, then overdue,
/// today, coming and this-month lists.
///
/// `recent` is `None` when the recent-notes section is turned off.
#[inline]
#[must_use]
pub fn render_dashboard(
    report: &ScanReport,
    recent: Option<&[RecentNote]>,
    show_stats: bool,
) -> String {
    let mut markup = Markup::new();

    if show_stats {
        render_stats(&mut markup, &report.stats);
    }
    if let Some(notes) = recent {
        render_recent(&mut markup, notes);
    }

    let blocks: [(&str, &str, &[Task]); 4] = [
        ("overdue tasks", "Overdue Tasks", report.buckets.overdue.as_slice()),
        ("today's tasks", "Today's Tasks", report.buckets.today.as_slice()),
        ("coming tasks", "Coming Tasks", report.buckets.this_week.as_slice()),
        (
            "this month's tasks",
            "This Month's Tasks",
            report.buckets.this_month.as_slice(),
        ),
    ];
    for (index, (title, label, tasks)) in blocks.into_iter().enumerate() {
        if index > 0 {
            markup.blank();
        }
        let spec = BlockSpec {
            title,
            total_label: Some(label),
            cap: DASHBOARD_CAP,
            style: BlockStyle::Dashboard,
        };
        render_block(&mut markup, &spec, tasks);
    }

    markup.finish()
}

/// Compact widget with only today's and this week's tasks.
#[inline]
#[must_use]
pub fn render_agenda(report: &ScanReport) -> String {
    let mut markup = Markup::new();
    let today = BlockSpec {
        title: "today's tasks",
        total_label: None,
        cap: AGENDA_CAP,
        style: BlockStyle::Agenda,
    };
    render_block(&mut markup, &today, &report.buckets.today);
    markup.blank();
    let week = BlockSpec {
        title: "this week's tasks",
        ..today
    };
    render_block(&mut markup, &week, &report.buckets.this_week);
    markup.finish()
}

fn render_stats(markup: &mut Markup, stats: &VaultStats) {
    markup.header("vault tasks");
    markup.rule();
    markup.line(&format!(
        " Total Notes: {} {ALIGN_RIGHT} Total Folders: {}",
        stats.notes, stats.folders
    ));
    markup.line(&format!(
        "{ACCENT} Total Tasks: {} {ALIGN_RIGHT}Completed Tasks: {} ({:.0}%) {PLAIN}",
        stats.open_tasks,
        stats.completed_tasks,
        stats.completion_percentage()
    ));
    markup.rule();
}

fn render_recent(markup: &mut Markup, notes: &[RecentNote]) {
    markup.header("recent notes");
    markup.rule();
    if notes.is_empty() {
        markup.line(&spaced_title("no recent notes"));
    }
    for note in notes {
        markup.line(&format!(
            "{BULLET} {} {ALIGN_RIGHT} {}",
            escape(&note.file_name()),
            note.modified.format(TIME_FORMAT)
        ));
    }
    markup.blank();
}
