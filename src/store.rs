// Whole-file JSON persistence for the task list

use crate::models::{ExtractedTask, Task};
use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Task list persisted as a single JSON array.
///
/// Every mutation follows the same shape: read the whole file, change the
/// in-memory list, overwrite the file. Last writer wins; there is no conflict
/// detection against concurrent external edits.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list.
    ///
    /// A missing or unparseable file is treated as an empty list, never as an
    /// error surfaced to the caller.
    pub fn load(&self) -> Vec<Task> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) => {
                debug!(path = ?self.path, error = ?e, "Tasks file not readable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&text) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(path = ?self.path, error = ?e, "Tasks file is malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the tasks file with the given list, 2-space indented
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("Failed to create tasks directory")?;
        }

        let json = serde_json::to_string_pretty(tasks).context("Failed to serialize task list")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write tasks file {}", self.path.display()))?;

        debug!(path = ?self.path, count = tasks.len(), "Saved task list");
        Ok(())
    }

    /// Append one task and persist
    pub fn add(&self, task: Task) -> Result<()> {
        let mut tasks = self.load();
        tasks.push(task);
        self.save(&tasks)
    }

    /// Mark the task at a 1-based index as completed.
    ///
    /// Returns false without touching the store when the index is outside
    /// [1, len].
    pub fn complete(&self, index: usize) -> Result<bool> {
        let mut tasks = self.load();
        if index == 0 || index > tasks.len() {
            return Ok(false);
        }

        tasks[index - 1].completed = true;
        self.save(&tasks)?;
        Ok(true)
    }

    /// Remove the task at a 1-based index.
    ///
    /// Returns the removed task, or None without touching the store when the
    /// index is outside [1, len].
    pub fn remove(&self, index: usize) -> Result<Option<Task>> {
        let mut tasks = self.load();
        if index == 0 || index > tasks.len() {
            return Ok(None);
        }

        let removed = tasks.remove(index - 1);
        self.save(&tasks)?;
        Ok(Some(removed))
    }

    /// Append one new task per extracted marker line and persist.
    ///
    /// Returns the number of imported tasks.
    pub fn import(&self, extracted: &[ExtractedTask]) -> Result<usize> {
        let mut tasks = self.load();

        for item in extracted {
            let mut task = Task::new(item.text.clone());
            task.source = Some(item.source_label());
            tasks.push(task);
        }

        self.save(&tasks)?;
        Ok(extracted.len())
    }
}
