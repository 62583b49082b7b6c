//! argguard CLI: argument-policy enforcement for Go function signatures.
//!
//! This binary provides the `argguard` command with subcommands for checking
//! Go sources, inspecting the configured rules, and generating shell
//! completions. See `argguard --help` for usage.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

/// Diagnostics from the engine go to stderr; `RUST_LOG` overrides the level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter: Box<dyn argguard_output::OutputFormatter> = if cli.json {
        Box::new(argguard_output::json::JsonFormatter)
    } else {
        Box::new(argguard_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check { paths, config } => commands::check::run(&*formatter, paths, config),
        Commands::Rules { config } => commands::rules::run(&*formatter, config),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}
