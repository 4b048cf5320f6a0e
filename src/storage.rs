//! Flat-file task persistence
//!
//! One task per line, pipe-delimited (see [`Task::to_line`]). New tasks are
//! appended; any other mutation rewrites the whole file from the in-memory
//! list. Expected list sizes are small, so the O(n) rewrite is fine.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::task::Task;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error on task file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of loading the task file
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file did not exist; an empty one was created. Start fresh.
    Created,
    /// The file existed and was read. `skipped` counts malformed lines
    /// that were dropped.
    Loaded { tasks: Vec<Task>, skipped: usize },
}

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the task file into an ordered list of tasks.
    ///
    /// A missing file is created empty and reported as [`LoadOutcome::Created`]
    /// so the caller can greet with a fresh-list message. A line that fails to
    /// parse is skipped and counted, never aborting the rest of the load.
    pub fn load(&self) -> Result<LoadOutcome, StorageError> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, "")?;
            return Ok(LoadOutcome::Created);
        }

        let content = fs::read_to_string(&self.path)?;
        let mut tasks = Vec::new();
        let mut skipped = 0;

        for (lineno, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Task::from_line(line) {
                Ok(task) => tasks.push(task),
                Err(e) => {
                    warn!(line = lineno + 1, error = %e, "skipping malformed task line");
                    skipped += 1;
                }
            }
        }

        Ok(LoadOutcome::Loaded { tasks, skipped })
    }

    /// Append one task to the file. Used on creation only.
    pub fn save_task(&self, task: &Task) -> Result<(), StorageError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", task.to_line())?;
        Ok(())
    }

    /// Rewrite the whole file from the in-memory list. Used after mark-done
    /// and delete. The previous file is copied to `<file>.bak` first;
    /// a failed backup is logged and the rewrite proceeds.
    pub fn update_tasks(&self, tasks: &[Task]) -> Result<(), StorageError> {
        if self.path.exists() {
            let backup = backup_path(&self.path);
            if let Err(e) = fs::copy(&self.path, &backup) {
                warn!("failed to back up task file: {}", e);
            }
        }

        let mut content = String::new();
        for task in tasks {
            content.push_str(&task.to_line());
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".bak");
    path.with_file_name(name)
}
