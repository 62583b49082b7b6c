use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "argguard",
    version,
    about = "Enforce required arguments on Go function signatures"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check Go sources against the configured rules
    Check {
        /// Files or directories to check (default: current directory)
        paths: Vec<PathBuf>,
        /// Rule configuration file
        #[arg(long, short, env = "ARGGUARD_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Print the loaded rule set
    Rules {
        /// Rule configuration file
        #[arg(long, short, env = "ARGGUARD_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell: bash, zsh, fish, elvish, powershell
        shell: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
