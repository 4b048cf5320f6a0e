//! Interactive chat loop on stdin/stdout

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub fn run(file: Option<PathBuf>) -> Result<()> {
    let (mut session, greeting) = super::open_session(file)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}\n", greeting.text);

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = session.respond(&line);
        println!("{}\n", reply.text);
        stdout.flush()?;

        if reply.exit {
            break;
        }
    }

    Ok(())
}
