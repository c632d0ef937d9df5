//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// flowcss - compile scss entries into expanded and minified css
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: flowcss.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compile every entry to `name.css` and `name.min.css`
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Remove generated `name.css` and `name.min.css` files
    #[command(visible_alias = "c")]
    Clean {
        #[command(flatten)]
        entry_args: EntryArgs,

        /// List files that would be removed without deleting them
        #[arg(short = 'n', long)]
        dry: bool,
    },
}

/// Entry selection shared by Build and Clean
#[derive(clap::Args, Debug, Clone, Default)]
pub struct EntryArgs {
    /// Directory holding the entry stylesheets (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Entry stylesheet file name; repeat to build several, replaces the configured list
    #[arg(short, long = "entry", value_name = "NAME")]
    pub entries: Vec<PathBuf>,
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub entry_args: EntryArgs,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Hide the progress line
    #[arg(short, long)]
    pub quiet: bool,
}
