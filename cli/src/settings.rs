//! Configuration shared by every subcommand.
//!
//! Each setting resolves as: explicit flag > environment variable > default.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

pub const INPUT_ENV: &str = "GRAPH_ENGINE_INPUT";
pub const OUTPUT_ENV: &str = "GRAPH_ENGINE_OUTPUT";
pub const FORMAT_ENV: &str = "GRAPH_ENGINE_FORMAT";

pub const DEFAULT_INPUT: &str = "input.txt";
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned tables
    #[default]
    Text,
    /// One JSON document per command
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Graph file to read
    #[arg(short, long, global = true, env = INPUT_ENV, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where `run` writes the normalised copy of the input graph
    #[arg(short, long, global = true, env = OUTPUT_ENV, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, global = true, env = FORMAT_ENV, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Resolved settings handed to the commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
}

impl From<&GlobalArgs> for Settings {
    fn from(args: &GlobalArgs) -> Self {
        Self {
            input: args.input.clone(),
            output: args.output.clone(),
            format: args.format,
        }
    }
}

/// Log filter directive for the verbosity flags. `RUST_LOG` is not consulted;
/// the flags are the single source.
pub fn log_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}
