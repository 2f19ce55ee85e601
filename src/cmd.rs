//! Command handlers: one thin function per action flag.
//!
//! Mutating handlers persist the list before returning, so a failed
//! operation never rewrites the file.

use std::path::Path;

use crate::list::{TaskError, TaskList};

/// Append a task and persist.
pub fn cmd_add(list: &mut TaskList, path: &Path, description: String) -> Result<(), TaskError> {
    list.add(description);
    list.save(path)
}

/// Mark a task done and persist.
pub fn cmd_complete(list: &mut TaskList, path: &Path, position: usize) -> Result<(), TaskError> {
    list.complete(position)?;
    list.save(path)
}

/// Delete a task and persist.
pub fn cmd_delete(list: &mut TaskList, path: &Path, position: usize) -> Result<(), TaskError> {
    list.delete(position)?;
    list.save(path)
}

/// Print the rendered list to stdout.
pub fn cmd_list(list: &TaskList, incomplete: bool, verbose: bool) {
    print!("{}", list.render(incomplete, verbose));
}
