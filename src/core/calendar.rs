// src/core/calendar.rs
use crate::models::Bucket;
use chrono::{Datelike as _, Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("date pattern is valid")
});

/// The first `YYYY-MM-DD` looking substring of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateToken<'a> {
    /// Exact matched text, removed from the displayed task.
    pub text: &'a str,
    /// `None` when the text is not a real calendar date (e.g. `2025-13-40`).
    pub date: Option<NaiveDate>,
}

/// Finds the first date token in `text`.
///
/// A token that looks like a date but fails strict `%Y-%m-%d` parsing is
/// still returned, with `date` set to `None`, so the caller can strip it
/// while treating the task as undated.
#[inline]
#[must_use]
pub fn find_date(text: &str) -> Option<DateToken<'_>> {
    DATE_RE.find(text).map(|m| DateToken {
        text: m.as_str(),
        date: NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok(),
    })
}

/// Date windows relative to a fixed "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    today: NaiveDate,
    end_of_week: NaiveDate,
    start_of_month: NaiveDate,
    end_of_month: NaiveDate,
}

impl Calendar {
    /// Weeks run Monday to Sunday.
    #[inline]
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        let start_of_week = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
        let end_of_week = start_of_week + Days::new(6);
        let start_of_month = today.with_day(1).unwrap_or(today);
        // Day 28 plus 4 always lands in the following month.
        let end_of_month = today
            .with_day(28)
            .and_then(|d| d.checked_add_days(Days::new(4)))
            .and_then(|d| d.with_day(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(today);

        Self {
            today,
            end_of_week,
            start_of_month,
            end_of_month,
        }
    }

    #[cfg(test)]
    const fn end_of_week(&self) -> NaiveDate {
        self.end_of_week
    }

    #[cfg(test)]
    const fn end_of_month(&self) -> NaiveDate {
        self.end_of_month
    }

    /// Picks the bucket for a task date. First match wins in the order
    /// overdue, today, this week, this month. Dates outside every window
    /// yield `None`.
    #[inline]
    #[must_use]
    pub fn classify(&self, date: Option<NaiveDate>) -> Option<Bucket> {
        let Some(date) = date else {
            return Some(Bucket::Undated);
        };

        if date < self.today {
            Some(Bucket::Overdue)
        } else if date == self.today {
            Some(Bucket::Today)
        } else if date <= self.end_of_week {
            Some(Bucket::ThisWeek)
        } else if (self.start_of_month..=self.end_of_month).contains(&date) {
            Some(Bucket::ThisMonth)
        } else {
            None
        }
    }
}
