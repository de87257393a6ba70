// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod render;
pub mod utils;

pub use crate::cli::{Args, Layout, OutputFormat, render_output, run};
pub use crate::core::calendar::{Calendar, DateToken, find_date};
pub use crate::core::display::display_text;
pub use crate::core::extract::{LineKind, build_task, classify_line, tally_note};
pub use crate::core::scanner::{ScanOptions, recent_notes, scan_vault};
pub use crate::render::{render_agenda, render_dashboard};
pub use crate::models::{
    Bucket, RecentNote, ScanReport, Task, TaskBuckets, UndatedPolicy, VaultStats,
};
