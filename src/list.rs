//! The task list core: in-memory ordering, mutation, rendering, and
//! JSON-file persistence.
//!
//! Tasks are addressed by their 1-based position in the current sequence.
//! Positions are dense (1..=len) and not stable: deleting a task shifts
//! every later task down by one. The whole list is loaded and rewritten
//! wholesale on each invocation; there is no incremental persistence and
//! no locking.

use std::fs;
use std::io;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::Task;

/// Errors surfaced by [`TaskList`] operations.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Position argument outside 1..=len for complete/delete.
    #[error("item {0} does not exist")]
    OutOfRange(usize),
    /// File read/write failure other than not-found on load.
    #[error("task file error: {0}")]
    Io(#[from] io::Error),
    /// Persisted file is not a valid task list.
    #[error("malformed task file: {0}")]
    Decode(serde_json::Error),
    /// Task list could not be encoded to JSON.
    #[error("could not encode task list: {0}")]
    Encode(serde_json::Error),
}

/// Ordered, file-backed collection of tasks.
///
/// Serializes as a bare JSON array of task objects, which is the on-disk
/// format shared with earlier versions of the tool.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Append a new open task, timestamped now.
    pub fn add(&mut self, description: impl Into<String>) {
        self.tasks.push(Task::new(description));
    }

    /// Mark the task at `position` done and stamp its completion time.
    ///
    /// Completing an already-done task is allowed and refreshes the
    /// completion timestamp.
    pub fn complete(&mut self, position: usize) -> Result<(), TaskError> {
        let task = self.get_mut(position)?;
        task.done = true;
        task.completed_at = Some(Utc::now());
        Ok(())
    }

    /// Remove the task at `position`, shifting later tasks down by one.
    pub fn delete(&mut self, position: usize) -> Result<(), TaskError> {
        self.get_mut(position)?;
        self.tasks.remove(position - 1);
        Ok(())
    }

    fn get_mut(&mut self, position: usize) -> Result<&mut Task, TaskError> {
        if position == 0 || position > self.tasks.len() {
            return Err(TaskError::OutOfRange(position));
        }
        Ok(&mut self.tasks[position - 1])
    }

    /// Replace the list contents with the tasks stored at `path`.
    ///
    /// A missing or zero-byte file is not an error; the list is simply left
    /// as-is (empty when called on a fresh list).
    pub fn load(&mut self, path: &Path) -> Result<(), TaskError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        if bytes.is_empty() {
            return Ok(());
        }
        self.tasks = serde_json::from_slice(&bytes).map_err(TaskError::Decode)?;
        Ok(())
    }

    /// Encode the whole list and overwrite the file at `path` (mode 0644).
    ///
    /// Encoding happens first, so an encode failure leaves the previous
    /// file untouched.
    pub fn save(&self, path: &Path) -> Result<(), TaskError> {
        let data = serde_json::to_vec(&self.tasks).map_err(TaskError::Encode)?;
        write_file(path, &data)?;
        Ok(())
    }

    /// Format the list for display, one line per task.
    ///
    /// Done tasks carry an `X` marker; positions are the true 1-based ones
    /// even when `filter_incomplete` skips completed tasks, so the numbers
    /// printed stay valid arguments to `--complete` and `--delete`.
    pub fn render(&self, filter_incomplete: bool, verbose: bool) -> String {
        let mut out = String::new();
        for (i, task) in self.tasks.iter().enumerate() {
            if filter_incomplete && task.done {
                continue;
            }
            let marker = if task.done { "X" } else { " " };
            out.push_str(&format!("{marker} {}: {}", i + 1, task.description));
            if verbose {
                out.push_str(&format!(
                    " - created {}",
                    task.created_at.format("%Y-%m-%d %H:%M")
                ));
                if let Some(done_at) = task.completed_at {
                    out.push_str(&format!(
                        " - completed {}",
                        done_at.format("%Y-%m-%d %H:%M")
                    ));
                }
            }
            out.push('\n');
        }
        out
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

#[cfg(unix)]
fn write_file(path: &Path, data: &[u8]) -> io::Result<()> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)?;
    file.write_all(data)
}

#[cfg(not(unix))]
fn write_file(path: &Path, data: &[u8]) -> io::Result<()> {
    fs::write(path, data)
}
