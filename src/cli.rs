//! Flag surface for the binary.
//!
//! The tool is flag-driven rather than subcommand-driven: each invocation
//! performs exactly one operation, chosen by whichever action flag is set.

use std::path::PathBuf;

use clap::Parser;

/// Simple, file-backed to-do list.
/// Storage defaults to ./.todo.json, or $TODO_FILENAME, or --db.
#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Minimal to-do list CLI")]
pub struct Cli {
    /// Add a task with this description.
    #[arg(long)]
    pub task: Option<String>,

    /// List all tasks.
    #[arg(long)]
    pub list: bool,

    /// Mark the task at this position done.
    #[arg(long, value_name = "POSITION")]
    pub complete: Option<usize>,

    /// Delete the task at this position.
    #[arg(long, value_name = "POSITION")]
    pub delete: Option<usize>,

    /// Hide completed tasks when listing.
    #[arg(long)]
    pub incomplete: bool,

    /// Show creation and completion times when listing.
    #[arg(long)]
    pub verbose: bool,

    /// Path to the JSON task file.
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// The single operation an invocation performs.
#[derive(Debug, PartialEq)]
pub enum Action {
    List,
    Complete(usize),
    Delete(usize),
    Add(String),
}

impl Cli {
    /// Pick the operation to run. `None` means no action flag was given,
    /// which is an invalid invocation.
    pub fn action(&self) -> Option<Action> {
        if self.list {
            Some(Action::List)
        } else if let Some(position) = self.complete {
            Some(Action::Complete(position))
        } else if let Some(position) = self.delete {
            Some(Action::Delete(position))
        } else if let Some(description) = &self.task {
            Some(Action::Add(description.clone()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("todo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn each_flag_maps_to_its_action() {
        assert_eq!(parse(&["--list"]).action(), Some(Action::List));
        assert_eq!(parse(&["--complete", "3"]).action(), Some(Action::Complete(3)));
        assert_eq!(parse(&["--delete", "1"]).action(), Some(Action::Delete(1)));
        assert_eq!(
            parse(&["--task", "buy milk"]).action(),
            Some(Action::Add("buy milk".into()))
        );
    }

    #[test]
    fn no_action_flag_is_invalid() {
        assert_eq!(parse(&[]).action(), None);
        assert_eq!(parse(&["--verbose"]).action(), None);
    }

    #[test]
    fn list_wins_over_other_flags() {
        let cli = parse(&["--list", "--task", "x"]);
        assert_eq!(cli.action(), Some(Action::List));
    }
}
