// src/models/buckets.rs
use crate::models::task::{Bucket, Task};
use serde::Serialize;

/// What to do with open tasks that carry no usable date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum UndatedPolicy {
    /// Leave them out of every list.
    #[default]
    Drop,
    /// Show them with the tasks coming up this week.
    Coming,
}

/// Open tasks grouped by bucket, each list in file-walk order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TaskBuckets {
    pub overdue: Vec<Task>,
    pub today: Vec<Task>,
    pub this_week: Vec<Task>,
    pub this_month: Vec<Task>,
}

impl TaskBuckets {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            overdue: Vec::new(),
            today: Vec::new(),
            this_week: Vec::new(),
            this_month: Vec::new(),
        }
    }

    /// Files `task` under its bucket. Returns `false` when the task is not
    /// listed anywhere (undated under [`UndatedPolicy::Drop`]).
    #[inline]
    pub fn insert(&mut self, task: Task, policy: UndatedPolicy) -> bool {
        match (task.bucket(), policy) {
            (Bucket::Overdue, _) => self.overdue.push(task),
            (Bucket::Today, _) => self.today.push(task),
            (Bucket::ThisWeek, _) | (Bucket::Undated, UndatedPolicy::Coming) => {
                self.this_week.push(task);
            }
            (Bucket::ThisMonth, _) => self.this_month.push(task),
            (Bucket::Undated, UndatedPolicy::Drop) => return false,
        }
        true
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.overdue.len() + self.today.len() + self.this_week.len() + self.this_month.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
