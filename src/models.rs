// src/models.rs
pub mod buckets;
pub mod recent_note;
pub mod scan_report;
pub mod task;
pub mod vault_stats;

pub use buckets::{TaskBuckets, UndatedPolicy};
pub use recent_note::RecentNote;
pub use scan_report::ScanReport;
pub use task::{Bucket, Task};
pub use vault_stats::VaultStats;
