//! `sbo add` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use crate::command::{self, Command};

#[derive(Args)]
pub struct AddArgs {
    /// The add command as you would type it in chat:
    /// `todo <text>`, `deadline <title> /by <date>` or `event <title> /at <date-time>`
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    words: Vec<String>,

    /// Path to the task file
    #[arg(long)]
    file: Option<PathBuf>,
}

pub fn run(args: AddArgs) -> Result<()> {
    let input = args.words.join(" ");

    match command::parse(&input) {
        Ok(Command::AddTodo(_) | Command::AddDeadline { .. } | Command::AddEvent { .. }) => {}
        Ok(_) => bail!("`sbo add` expects a todo, deadline or event command"),
        Err(e) => bail!("{}", e),
    }

    let (mut session, _) = super::open_session(args.file)?;
    let reply = session.respond(&input);
    println!("{}", reply.text);
    Ok(())
}
