//! # todo - Minimal to-do list CLI
//!
//! A small, file-backed task manager for the terminal. Tasks live in a
//! single JSON file; each invocation loads the file, performs one
//! operation, and (for mutations) rewrites it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a task
//! todo --task "Write the release notes"
//!
//! # See everything
//! todo --list
//!
//! # Only what's left, with timestamps
//! todo --list --incomplete --verbose
//!
//! # Mark item 2 done, delete item 1
//! todo --complete 2
//! todo --delete 1
//! ```
//!
//! ## Storage
//!
//! Tasks are stored in `.todo.json` in the working directory. Override the
//! location with `$TODO_FILENAME`, or per invocation with `--db <path>`.
//! Positions shown by `--list` are 1-based and reflect the current file
//! order; deleting an item renumbers everything after it.

use std::path::PathBuf;
use std::process;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod list;
pub mod task;

use cli::{Action, Cli};
use cmd::*;
use list::TaskList;

const TODO_FILENAME: &str = ".todo.json";
const TODO_FILENAME_ENV: &str = "TODO_FILENAME";

fn main() {
    let cli = Cli::parse();

    // Resolved once here and passed down; nothing else reads the environment.
    let path = cli.db.clone().unwrap_or_else(|| {
        std::env::var_os(TODO_FILENAME_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(TODO_FILENAME))
    });

    let mut list = TaskList::default();
    if let Err(e) = list.load(&path) {
        eprintln!("{e}");
        process::exit(1);
    }

    let Some(action) = cli.action() else {
        eprintln!("invalid operation");
        process::exit(1);
    };

    let result = match action {
        Action::List => {
            cmd_list(&list, cli.incomplete, cli.verbose);
            Ok(())
        }
        Action::Complete(position) => cmd_complete(&mut list, &path, position),
        Action::Delete(position) => cmd_delete(&mut list, &path, position),
        Action::Add(description) => cmd_add(&mut list, &path, description),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}
