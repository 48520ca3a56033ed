use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::model::Stage;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "class-guard")]
#[command(author, version, about = "Structural validator for staged C++ exercise submissions")]
#[command(long_about = "Extracts class definitions from a C++ submission and checks them \
    against the rules of a curriculum stage.\n\n\
    Exit codes:\n  \
    0 - No issue at or above the failure threshold\n  \
    1 - Validation failed (including unreadable submission paths)\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Submission directory to validate
    pub path: PathBuf,

    /// Curriculum stage whose rules apply [default: basics]
    #[arg(value_enum)]
    pub stage: Option<Stage>,

    /// Configuration file setting the failure threshold
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
