//! CLI command implementations

pub mod add;
pub mod chat;
pub mod definition;
pub mod done;
pub mod list;
pub mod remove;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::path::PathBuf;

use crate::chat::{Greeting, Session};
use crate::config::load_config;
use crate::storage::Storage;

/// Open a session over the task file: the `--file` override if given,
/// otherwise the configured path.
pub fn open_session(file: Option<PathBuf>) -> Result<(Session, Greeting)> {
    let config = load_config()?;
    let path = match file {
        Some(path) => path,
        None => config.task_file()?,
    };
    let (session, greeting) = Session::open(Storage::new(path), &config.user_name)?;
    Ok((session, greeting))
}
