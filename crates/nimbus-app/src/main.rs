//! Nimbus console entry point.
//!
//! Reads lines from stdin, runs each through the shell, and prints the
//! produced output. `exit` or end-of-input terminates the loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use nimbus_platform::{SimpleRng, SystemClock};
use nimbus_shell::Shell;
use nimbus_types::ShellConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg, NIMBUS_CONFIG env var, or defaults.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("NIMBUS_CONFIG").ok())
    {
        Some(path) => ShellConfig::load_or_default(&PathBuf::from(path)),
        None => ShellConfig::default(),
    };
    log::info!(
        "Starting nimbus console as {}@{}",
        config.username,
        config.hostname
    );

    let mut shell = Shell::new(
        config,
        Box::new(SystemClock),
        Box::new(SimpleRng::from_system_time()),
    );

    println!("nimbus v0.1.0 -- simulated cloud operations console");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        let (instances, repos, keys) = shell.session().counts();
        write!(
            stdout,
            "[{instances} inst | {repos} repos | {keys} keys] {}@{}:{}$ ",
            shell.config().username,
            shell.config().hostname,
            shell.session().cwd(),
        )?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim() == "exit" {
            break;
        }
        if let Some(output) = shell.run_line(&line) {
            if !output.is_empty() {
                println!("{output}");
            }
        }
    }

    log::info!("nimbus console shut down cleanly");
    Ok(())
}
