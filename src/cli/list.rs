//! `sbo list` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ListArgs {
    /// Path to the task file
    #[arg(long)]
    file: Option<PathBuf>,
}

pub fn run(args: ListArgs) -> Result<()> {
    let (mut session, _) = super::open_session(args.file)?;
    println!("{}", session.respond("list").text);
    Ok(())
}
