// src/models/scan_report.rs
use crate::models::{TaskBuckets, VaultStats};
use serde::Serialize;

/// Everything a single pass over the vault produces.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub stats: VaultStats,
    pub buckets: TaskBuckets,
}

impl ScanReport {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stats: VaultStats::new(),
            buckets: TaskBuckets::new(),
        }
    }
}
