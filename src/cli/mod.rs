//! Command-line interface module.

mod args;
pub mod build;
pub mod clean;

pub use args::{BuildArgs, Cli, Commands, EntryArgs};
