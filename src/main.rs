pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod palette;
pub(crate) mod render;
pub(crate) mod stream;

use clap::Parser;
use cli::{Cli, RunError};
use crossterm::tty::IsTty;
use log::debug;
use render::{Renderer, ThreadSleeper};
use std::io;
use std::process::ExitCode;

fn run(cli: Cli) -> Result<(), RunError> {
    let (config, files) = cli.into_parts()?;
    debug!("resolved configuration: {config:?}");

    if !config.force && !io::stdout().is_tty() {
        return Err(RunError::NotATerminal);
    }

    let renderer = Renderer::new(config);
    let sleeper = ThreadSleeper;
    let mut stdout = io::stdout().lock();

    if files.is_empty() {
        // A stdin that is a terminal means nothing was piped in
        if io::stdin().is_tty() {
            return Err(RunError::NoInput);
        }
        stream::process_source(io::stdin().lock(), &mut stdout, &renderer, &sleeper)?;
    } else {
        stream::process_files(&files, &mut stdout, &renderer, &sleeper);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
