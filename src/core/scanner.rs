// src/core/scanner.rs
mod notes;
mod recent;
#[cfg(test)]
pub(crate) mod test_utils;
mod utils;

pub use notes::scan_vault;
pub use recent::recent_notes;

/// Narrows which parts of the vault are walked. The default walks everything.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Directory names pruned from the walk wherever they appear.
    pub exclude_dirs: Vec<String>,
    /// Skip files and directories whose name starts with `.`.
    pub skip_hidden: bool,
}
