// tests/integration_tests/scanning_test.rs
use super::common::{calendar, setup_test_vault};
use anyhow::Result;
use vaultask::{ScanOptions, Task, UndatedPolicy, scan_vault};

fn texts(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::display_text).collect()
}

#[test]
fn test_scan_counts() -> Result<()> {
    let temp_dir = setup_test_vault()?;
    let report = scan_vault(
        temp_dir.path(),
        &ScanOptions::default(),
        &calendar(),
        UndatedPolicy::Drop,
    )?;

    assert_eq!(report.stats.notes, 3, "Only .md files are notes");
    assert_eq!(report.stats.folders, 2);
    assert_eq!(report.stats.open_tasks, 8);
    assert_eq!(report.stats.completed_tasks, 2);
    // Clean gutters is out of range, Someday and Renew are undated.
    assert_eq!(report.stats.dropped_tasks, 3);

    Ok(())
}

#[test]
fn test_scan_buckets() -> Result<()> {
    let temp_dir = setup_test_vault()?;
    let report = scan_vault(
        temp_dir.path(),
        &ScanOptions::default(),
        &calendar(),
        UndatedPolicy::Drop,
    )?;

    assert_eq!(texts(&report.buckets.overdue), vec!["Book flights"]);
    assert_eq!(texts(&report.buckets.today), vec!["Standup notes"]);
    // daily/ sorts before inbox.md, which sorts before projects/
    assert_eq!(texts(&report.buckets.this_week), vec!["Read", "Fix sink"]);
    assert_eq!(texts(&report.buckets.this_month), vec!["Paint fence"]);

    Ok(())
}

#[test]
fn test_scan_undated_coming() -> Result<()> {
    let temp_dir = setup_test_vault()?;
    let report = scan_vault(
        temp_dir.path(),
        &ScanOptions::default(),
        &calendar(),
        UndatedPolicy::Coming,
    )?;

    assert_eq!(texts(&report.buckets.this_week), vec!["Read", "Someday maybe", "Renew", "Fix sink"]);
    assert_eq!(report.stats.dropped_tasks, 1);

    Ok(())
}

#[test]
fn test_scan_exclude_dirs() -> Result<()> {
    let temp_dir = setup_test_vault()?;
    let options = ScanOptions {
        exclude_dirs: vec![String::from("daily"), String::from("projects")],
        skip_hidden: false,
    };
    let report = scan_vault(temp_dir.path(), &options, &calendar(), UndatedPolicy::Drop)?;

    assert_eq!(report.stats.notes, 1);
    assert_eq!(report.stats.folders, 0);
    assert_eq!(report.stats.open_tasks, 3);

    Ok(())
}

#[test]
fn test_scan_is_idempotent() -> Result<()> {
    let temp_dir = setup_test_vault()?;
    let scan = || {
        scan_vault(
            temp_dir.path(),
            &ScanOptions::default(),
            &calendar(),
            UndatedPolicy::Drop,
        )
    };
    assert_eq!(scan()?, scan()?);
    Ok(())
}
