//! Main application entry point.

use figureboard_app::{AppConfig, Shell, ShellError};
use std::io;

fn run() -> Result<(), ShellError> {
    let config = AppConfig::load()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config);
    let reason = shell.run()?;
    log::info!("Shell finished: {:?}", reason);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Starting Figureboard");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
