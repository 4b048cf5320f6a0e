//! `sbo done` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct DoneArgs {
    /// Task number as shown by `sbo list` (1-based)
    number: usize,

    /// Path to the task file
    #[arg(long)]
    file: Option<PathBuf>,
}

pub fn run(args: DoneArgs) -> Result<()> {
    let (mut session, _) = super::open_session(args.file)?;
    println!("{}", session.respond(&format!("done {}", args.number)).text);
    Ok(())
}
