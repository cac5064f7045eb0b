use crate::config::{parse_delay, ColorMode, Config};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

const AFTER_HELP: &str = "EXAMPLES:
    echo 'Hello World' | prismcat
    prismcat --mode fire --animate file.txt
    fortune | prismcat -m ocean -s 2.0
    ls -la | prismcat --mode matrix
";

/// Colorize text with rainbow and other effects
#[derive(Parser)]
#[command(name = "prismcat", version, after_help = AFTER_HELP)]
pub(crate) struct Cli {
    /// Files to colorize; read standard input when none are given
    files: Vec<PathBuf>,

    /// Color mode: rainbow(r), fire(f), ocean(o), matrix(m), pastel(p)
    #[arg(short, long, default_value = "rainbow")]
    mode: String,

    /// Animation speed, added to the phase before the sine evaluation
    #[arg(short, long, default_value_t = 0.0)]
    speed: f64,

    /// Color spread factor between adjacent characters
    #[arg(short = 'p', long, default_value_t = 1.0)]
    spread: f64,

    /// Frequency of color changes
    #[arg(short, long, default_value_t = 0.1)]
    frequency: f64,

    /// Enable animation effect
    #[arg(short, long)]
    animate: bool,

    /// Animation delay, a value plus unit suffix such as 100ms
    #[arg(short, long, default_value = "100ms")]
    delay: String,

    /// Force color output even when not writing to a terminal
    #[arg(long)]
    force: bool,
}

impl Cli {
    /// Validate the stringly-typed arguments and freeze the configuration.
    pub(crate) fn into_parts(self) -> Result<(Config, Vec<PathBuf>), RunError> {
        let mode = ColorMode::from_str(&self.mode)
            .map_err(|_| RunError::UnknownMode(self.mode.clone()))?;
        let delay = parse_delay(&self.delay).map_err(|e| RunError::InvalidDelay(e.0))?;
        let config = Config {
            mode,
            speed: self.speed,
            spread: self.spread,
            frequency: self.frequency,
            animate: self.animate,
            delay,
            force: self.force,
        };
        Ok((config, self.files))
    }
}

/// Fatal conditions; each maps to exit code 1.
#[derive(thiserror::Error, Debug)]
pub(crate) enum RunError {
    #[error("unknown color mode: {0}")]
    UnknownMode(String),

    #[error("invalid delay format: {0}")]
    InvalidDelay(String),

    #[error("output is not a terminal, use --force to override")]
    NotATerminal,

    #[error("no input provided, pipe text in or specify files")]
    NoInput,

    #[error("error reading stdin: {0}")]
    Stdin(#[from] io::Error),
}
