//! Spongebob Organiser - chat-style task organiser for the terminal

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use spongebob_organiser::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("SBO_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("spongebob_organiser=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "sbo", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Add(args)) => cli::add::run(args),
        Some(Commands::List(args)) => cli::list::run(args),
        Some(Commands::Done(args)) => cli::done::run(args),
        Some(Commands::Remove(args)) => cli::remove::run(args),
        None => cli::chat::run(cli.file),
    }
}
