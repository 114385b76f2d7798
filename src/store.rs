// Persistent store adapter: one JSON slot holding the whole task array

use crate::list::TaskList;
use crate::task::Task;
use eyre::{Context, Result, eyre};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads and writes the serialized task collection under a fixed path.
/// Owns no business logic: `load` degrades to empty on anything malformed,
/// `save` reports failure and leaves retry policy to the caller.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Default slot: `<user data dir>/taskpad/tasks.json`
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or_else(|| eyre!("No user data directory available"))?;
        Ok(base.join("taskpad").join("tasks.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored collection. A missing slot, an unreadable file, or
    /// unparseable JSON all degrade to the empty collection; parse failures
    /// are never surfaced to the caller.
    pub fn load(&self) -> TaskList {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = ?self.path, "No stored tasks, starting empty");
                return TaskList::new();
            }
            Err(e) => {
                warn!(path = ?self.path, error = ?e, "Stored tasks unreadable, starting empty");
                return TaskList::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                debug!(path = ?self.path, count = tasks.len(), "Loaded stored tasks");
                TaskList::from(tasks)
            }
            Err(e) => {
                warn!(path = ?self.path, error = ?e, "Stored tasks failed to parse, starting empty");
                TaskList::new()
            }
        }
    }

    /// Replace the stored collection with `list`. Writes to a temp file in
    /// the same directory and renames over the slot, so the stored value is
    /// never partially applied.
    pub fn save(&self, list: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create store directory")?;
        }

        let json = serde_json::to_string_pretty(list.tasks())
            .context("Failed to serialize tasks")?;

        let tmp = self.path.with_extension("json.tmp");
        let mut file = File::create(&tmp).context("Failed to create temp store file")?;
        file.write_all(json.as_bytes())
            .context("Failed to write tasks")?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path).context("Failed to replace stored tasks")?;

        debug!(path = ?self.path, count = list.total(), "Saved tasks");
        Ok(())
    }
}
