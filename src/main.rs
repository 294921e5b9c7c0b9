//! Bank Mediator CLI
//!
//! Runs the reference scenario: a deposit and a withdrawal logged to
//! `operacje.txt` in the working directory, then the tax on 2507 for each
//! supported country. Waits for Enter before exiting.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use bank_mediator::{run_scenario, Config, Result};
use std::io::{self, BufRead, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::default();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_scenario(&config, &mut handle)?;

    writeln!(handle, "Press Enter to exit...")?;
    handle.flush()?;

    // EOF ends the wait as well
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(())
}
