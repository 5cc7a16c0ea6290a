use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
use root_commands::Commands;

/// Top-level CLI parser for the `agbero` binary.
#[derive(Debug, Parser)]
#[command(
    name = "agbero",
    version,
    about = "Agbero - on-chain activity logger and deploy orchestrator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress progress and non-error logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Hash and count activities without sending transactions
    #[arg(long, global = true)]
    pub offline: bool,

    /// Project root (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            offline: self.offline,
            project: self.project.clone(),
        }
    }
}
