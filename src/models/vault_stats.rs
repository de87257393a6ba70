// src/models/vault_stats.rs
use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct VaultStats {
    pub notes: u64,
    pub folders: u64,
    pub open_tasks: u64,
    pub completed_tasks: u64,
    /// Open tasks dated outside every listed window.
    pub dropped_tasks: u64,
    pub unreadable_notes: u64,
}

impl VaultStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            notes: 0,
            folders: 0,
            open_tasks: 0,
            completed_tasks: 0,
            dropped_tasks: 0,
            unreadable_notes: 0,
        }
    }

    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn completion_percentage(&self) -> f64 {
        let total = self.open_tasks.saturating_add(self.completed_tasks);
        if total == 0 {
            return 0.0;
        }
        (self.completed_tasks as f64 / total as f64) * 100.0
    }
}
