//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::error::Result;
use crate::solver::{SolverConfig, DEFAULT_STEP_LIMIT};

pub const DEFAULT_WORDS_PATH: &str = "/usr/share/dict/words";

/// Solve monoalphabetic substitution cryptograms against a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "cryptogram_solver")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Args {
    /// Cryptogram to solve; without it, lines are read from stdin until interrupted
    #[arg(value_name = "CRYPTOGRAM")]
    pub cryptogram: Option<String>,

    /// Newline-delimited word list
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_WORDS_PATH)]
    pub words: PathBuf,

    /// Search steps allowed per cryptogram
    #[arg(short, long, default_value_t = DEFAULT_STEP_LIMIT)]
    pub step_limit: usize,

    /// Try candidate words in alphabetical order instead of word list order
    #[arg(long)]
    pub sorted: bool,

    /// Keep punctuation from the input in the decoded text
    #[arg(short = 'p', long)]
    pub keep_punctuation: bool,

    /// Verbosity (-v prints the key and info logs, -vv debug logs, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    pub fn solver_config(&self) -> Result<SolverConfig> {
        let config = SolverConfig::default()
            .with_step_limit(self.step_limit)
            .with_sorted_candidates(self.sorted);
        config.validate()?;
        Ok(config)
    }
}
