//! Clap CLI definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::{add::AddArgs, done::DoneArgs, list::ListArgs, remove::RemoveArgs};

#[derive(Parser)]
#[command(name = "sbo", version, about = "Chat-style task organiser for the terminal")]
pub struct Cli {
    /// Path to the task file (chat mode)
    #[arg(long)]
    pub file: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task using the chat syntax, e.g. `sbo add deadline report /by 2023-12-01`
    Add(AddArgs),

    /// List all tasks
    List(ListArgs),

    /// Mark a task as done
    Done(DoneArgs),

    /// Remove a task from the list
    Remove(RemoveArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
