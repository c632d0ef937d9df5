//! flowcss - build tool for the flow-utilities CSS distribution.
//!
//! Compiles each entry stylesheet to `name.css` and `name.min.css` next to it.

mod asset;
mod cli;
mod config;
mod logger;
mod utils;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::FlowConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            elog!("error"; "{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = FlowConfig::load(cli)?;

    match &cli.command {
        Commands::Build { build_args } => {
            cli::build::build_entries(&config, build_args.quiet).map(|_| ())
        }
        Commands::Clean { dry, .. } => cli::clean::clean_outputs(&config, *dry).map(|_| ()),
    }
}
