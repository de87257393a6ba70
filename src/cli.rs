// src/cli.rs
use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use crate::core::calendar::Calendar;
use crate::core::scanner::{ScanOptions, recent_notes, scan_vault};
use crate::models::{RecentNote, ScanReport, UndatedPolicy};
use crate::render::{render_agenda, render_dashboard};
use crate::utils::{default_notes_dir, expand_home};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Vault stats, recent notes and every task list
    #[default]
    Dashboard,
    /// Today's and this week's tasks only
    Agenda,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Conky text markup
    #[default]
    Conky,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Notes directory to scan (defaults to ~/Notes)
    pub directory: Option<PathBuf>,

    /// Which widget to render
    #[arg(short, long, value_enum, default_value_t = Layout::Dashboard)]
    pub layout: Layout,

    /// Where tasks without a date go
    #[arg(short, long, value_enum, default_value_t = UndatedPolicy::Drop)]
    pub undated: UndatedPolicy,

    /// Date to treat as today, as YYYY-MM-DD (defaults to the local date)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Number of recently modified notes to show (0 hides the section)
    #[arg(short, long, default_value = "3")]
    pub recent: usize,

    /// Hide the vault statistics section
    #[arg(long)]
    pub no_stats: bool,

    /// Directories to skip (comma-separated, e.g. ".obsidian,.trash")
    #[arg(short, long, default_value = "")]
    pub exclude: String,

    /// Skip hidden files and directories
    #[arg(long)]
    pub skip_hidden: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Conky)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    today: NaiveDate,
    #[serde(flatten)]
    report: &'a ScanReport,
    recent_notes: &'a [RecentNote],
}

/// Scans the vault and prints the widget text to stdout.
///
/// # Errors
///
/// Fails when the notes directory does not exist or the output cannot be
/// serialized.
#[inline]
pub fn run(args: Args) -> Result<()> {
    let output = render_output(&args)?;
    print!("{output}");
    Ok(())
}

/// Everything [`run`] prints, as a string.
///
/// # Errors
///
/// Same as [`run`].
#[inline]
pub fn render_output(args: &Args) -> Result<String> {
    let directory = match &args.directory {
        Some(dir) => expand_home(dir)?,
        None => default_notes_dir()?,
    };
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let calendar = Calendar::new(today);
    let options = ScanOptions {
        exclude_dirs: args
            .exclude
            .split(',')
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .map(str::to_owned)
            .collect(),
        skip_hidden: args.skip_hidden,
    };

    let report = scan_vault(&directory, &options, &calendar, args.undated)
        .with_context(|| format!("Failed to scan notes in: {}", directory.display()))?;
    let recent = if args.layout == Layout::Dashboard {
        recent_notes(&directory, &options, args.recent)?
    } else {
        Vec::new()
    };

    let output = match (args.format, args.layout) {
        (OutputFormat::Json, _) => {
            let json = JsonOutput {
                today,
                report: &report,
                recent_notes: &recent,
            };
            let mut text = serde_json::to_string_pretty(&json)
                .context("Failed to serialize scan report")?;
            text.push('\n');
            text
        }
        (OutputFormat::Conky, Layout::Dashboard) => render_dashboard(
            &report,
            (args.recent > 0).then_some(recent.as_slice()),
            !args.no_stats,
        ),
        (OutputFormat::Conky, Layout::Agenda) => render_agenda(&report),
    };
    Ok(output)
}
