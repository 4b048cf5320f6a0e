//! `sbo remove` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task number as shown by `sbo list` (1-based)
    number: usize,

    /// Path to the task file
    #[arg(long)]
    file: Option<PathBuf>,
}

pub fn run(args: RemoveArgs) -> Result<()> {
    let (mut session, _) = super::open_session(args.file)?;
    println!(
        "{}",
        session.respond(&format!("delete {}", args.number)).text
    );
    Ok(())
}
