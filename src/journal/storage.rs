use super::types::{Journal, JOURNAL_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the default journal file path (~/.config/mindbloom/journal.json)
pub fn get_journal_path() -> PathBuf {
    crate::config::get_config_dir().join("journal.json")
}

/// Load the journal from a JSON file
///
/// If the file doesn't exist, returns a new empty journal.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_journal(path: &Path) -> Result<Journal> {
    if !path.exists() {
        return Ok(Journal::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open journal file at {}", path.display()))?;

    let journal: Journal = serde_json::from_reader(file)
        .with_context(|| format!("Failed to load journal from {}", path.display()))?;

    if journal.version != JOURNAL_VERSION {
        anyhow::bail!("Unsupported journal version: {}", journal.version);
    }

    Ok(journal)
}

/// Save the journal atomically, creating the parent directory if needed
pub fn save_journal(path: &Path, journal: &Journal) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, journal).context("Failed to serialize journal")?;

    file.commit().context("Failed to save journal")?;

    Ok(())
}
