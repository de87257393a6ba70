use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// Vault used by the scanner tests, with "today" taken as 2025-01-15.
pub fn setup_test_vault() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(
        &dir,
        "inbox.md",
        "# Inbox\n- [ ] Pay rent 2025-01-10\n- [ ] Dentist 2025-01-15\n- [x] Buy milk\n",
    )?;
    create_test_file(
        &dir,
        "projects/garden.md",
        "- [ ] Order seeds 2025-01-17\n- [ ] Plan beds 2025-01-28\n- [ ] Someday\n",
    )?;
    create_test_file(&dir, "projects/archive/old.md", "- [x] Done long ago\n")?;
    create_test_file(&dir, ".obsidian/hidden.md", "- [ ] Hidden 2025-01-15\n")?;
    create_test_file(&dir, "attachment.txt", "- [ ] Not a note 2025-01-15\n")?;
    create_test_file(&dir, "UPPER.MD", "- [ ] Wrong case 2025-01-15\n")?;

    Ok(dir)
}
