//! Sheet source persistence: named UTF-8 text blobs.
//!
//! The model layer only depends on the [`SheetStore`] trait; the default
//! implementation keeps one `.txt` file per sheet in a storage directory.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// One persisted sheet source.
#[derive(Debug, Clone)]
pub struct SheetSource {
    /// Sheet id (the file stem in the file-backed store)
    pub id: String,
    /// Full text of the sheet
    pub text: String,
}

/// Storage for sheet text blobs, keyed by sheet id.
pub trait SheetStore {
    /// Enumerate every readable sheet source
    fn list(&self) -> Result<Vec<SheetSource>>;
    /// Read one source, `None` when absent
    fn read(&self, id: &str) -> Result<Option<String>>;
    /// Create or overwrite one source
    fn write(&mut self, id: &str, text: &str) -> Result<()>;
    /// Remove one source; removing an absent id is not an error
    fn delete(&mut self, id: &str) -> Result<()>;
}

/// File-backed sheet store: one UTF-8 `.txt` file per sheet.
pub struct FileSheetStore {
    dir: PathBuf,
}

impl FileSheetStore {
    /// Store under an explicit directory (created on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the platform config directory
    pub fn open_default() -> Result<Self> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("devpad")
            .join("sheets");
        Ok(Self::new(dir))
    }

    fn sheet_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.txt"))
    }
}

impl SheetStore for FileSheetStore {
    fn list(&self) -> Result<Vec<SheetSource>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read sheet directory: {}", self.dir.display()))?;

        let mut sources = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "txt") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            // An unreadable file is treated as absent, not fatal.
            let Ok(text) = fs::read_to_string(&path) else {
                continue;
            };
            sources.push(SheetSource {
                id: id.to_string(),
                text,
            });
        }

        Ok(sources)
    }

    fn read(&self, id: &str) -> Result<Option<String>> {
        let path = self.sheet_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read sheet file: {}", path.display()))?;
        Ok(Some(text))
    }

    fn write(&mut self, id: &str, text: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create sheet directory: {}", self.dir.display()))?;
        let path = self.sheet_path(id);
        fs::write(&path, text)
            .with_context(|| format!("Failed to write sheet file: {}", path.display()))
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let path = self.sheet_path(id);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete sheet file: {}", path.display()))
    }
}

/// In-memory sheet store for tests and hosts that manage their own
/// persistence.
#[derive(Debug, Default)]
pub struct MemorySheetStore {
    sheets: HashMap<String, String>,
}

impl MemorySheetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SheetStore for MemorySheetStore {
    fn list(&self) -> Result<Vec<SheetSource>> {
        let mut sources: Vec<SheetSource> = self
            .sheets
            .iter()
            .map(|(id, text)| SheetSource {
                id: id.clone(),
                text: text.clone(),
            })
            .collect();
        // HashMap iteration order is arbitrary; stabilize for callers.
        sources.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(sources)
    }

    fn read(&self, id: &str) -> Result<Option<String>> {
        Ok(self.sheets.get(id).cloned())
    }

    fn write(&mut self, id: &str, text: &str) -> Result<()> {
        self.sheets.insert(id.to_string(), text.to_string());
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.sheets.remove(id);
        Ok(())
    }
}
