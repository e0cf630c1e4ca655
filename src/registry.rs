//! The append-only log of created projects.

use chrono::Local;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// One line is appended per created project:
/// `<YYYY-MM-DD HH:MM> — <IDENTIFIER> (<path>)`.
/// The file is never rewritten or compacted.
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Appends one entry, creating the containing directory if needed.
    pub fn append(&self, identifier: &str, project_dir: &Path) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file =
            std::fs::OpenOptions::new().create(true).append(true).open(&self.path)?;
        let timestamp = Local::now().format("%Y-%m-%d %H:%M");
        writeln!(file, "{timestamp} — {identifier} ({})", project_dir.display())?;
        Ok(())
    }

    /// Full registry contents, or `None` when nothing was logged yet.
    pub fn read_all(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }
}
