//! Configuration section definitions.
//!
//! Each module corresponds to a section in `flowcss.toml`:
//!
//! | Module     | TOML Section   | Purpose                             |
//! |------------|----------------|-------------------------------------|
//! | `build`    | `[build]`      | Source dir, entries, sass           |

pub mod build;

pub use build::BuildSectionConfig;
