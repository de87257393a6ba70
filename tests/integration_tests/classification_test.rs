// tests/integration_tests/classification_test.rs
use super::common::{calendar, ymd};
use vaultask::{Bucket, build_task, find_date};

#[test]
fn test_boundaries() {
    let cal = calendar();

    let bucket = |text: &str| build_task(text, &cal).map(|task| task.bucket());

    assert_eq!(bucket("Due today 2025-01-15"), Some(Bucket::Today));
    assert_eq!(bucket("Yesterday 2025-01-14"), Some(Bucket::Overdue));
    assert_eq!(bucket("Sunday 2025-01-19"), Some(Bucket::ThisWeek));
    assert_eq!(bucket("Monday 2025-01-20"), Some(Bucket::ThisMonth));
    assert_eq!(bucket("Month end 2025-01-31"), Some(Bucket::ThisMonth));
    assert_eq!(bucket("Next month 2025-02-01"), None);
    assert_eq!(bucket("Last year 2024-01-20"), Some(Bucket::Overdue));
}

#[test]
fn test_malformed_date_matches_missing_date() {
    let cal = calendar();
    let malformed = build_task("Renew 2025-13-40", &cal).map(|task| task.bucket());
    let missing = build_task("Renew", &cal).map(|task| task.bucket());
    assert_eq!(malformed, missing);
    assert_eq!(malformed, Some(Bucket::Undated));
}

#[test]
fn test_only_first_date_counts() {
    let token = find_date("Move 2025-01-20 to 2025-01-15").expect("date token");
    assert_eq!(token.date, Some(ymd(2025, 1, 20)));

    let task = build_task("Move 2025-01-20 to 2025-01-15", &calendar()).expect("listed");
    assert_eq!(task.bucket(), Bucket::ThisMonth);
    assert_eq!(task.display_text(), "Move to 2025-01-15");
}

#[test]
fn test_classification_is_deterministic() {
    let cal = calendar();
    for day in 1..=31 {
        let text = format!("Task 2025-01-{day:02}");
        let first = build_task(&text, &cal).map(|task| task.bucket());
        let second = build_task(&text, &cal).map(|task| task.bucket());
        assert_eq!(first, second);
        assert!(first.is_some(), "every January date is listed");
    }
}
