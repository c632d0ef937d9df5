//! Small shared helpers.
//!
//! - [`path`]: filesystem path normalization
//! - [`plural`]: count formatting for log lines

pub mod path;
mod plural;

pub use plural::plural_count;
