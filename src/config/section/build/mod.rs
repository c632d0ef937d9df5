//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! source = "src"              # Directory holding entries and their outputs
//! entries = [                 # Compiled in this order
//!   "flow-utilities.scss",
//!   "flow-utilities-bootstrap.scss",
//!   "flow-utilities-tailwindcss.scss",
//! ]
//!
//! [build.sass]
//! load_paths = ["node_modules"]
//! ```

mod sass;

pub use sass::SassConfig;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::is_bare_file_name;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Entry stylesheets of the flow-utilities distribution.
pub const DEFAULT_ENTRIES: [&str; 3] = [
    "flow-utilities.scss",
    "flow-utilities-bootstrap.scss",
    "flow-utilities-tailwindcss.scss",
];

/// Accepted entry extension. The indented `.sass` syntax is not supported
/// by the compiler.
const ENTRY_EXTENSION: &str = "scss";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Directory holding the entry stylesheets; outputs are written here too.
    pub source: PathBuf,

    /// Entry stylesheet file names, processed in order.
    pub entries: Vec<PathBuf>,

    /// Stylesheet compiler settings.
    pub sass: SassConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            source: "src".into(),
            entries: DEFAULT_ENTRIES.iter().map(PathBuf::from).collect(),
            sass: SassConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub const SOURCE: FieldPath = FieldPath::new("build.source");
    pub const ENTRIES: FieldPath = FieldPath::new("build.entries");

    /// Absolute paths of every entry, in build order.
    pub fn entry_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.entries.iter().map(|entry| self.source.join(entry))
    }

    /// Resolve relative paths against the project root.
    pub fn normalize(&mut self, root: &Path) {
        self.source = crate::utils::path::normalize_path(&root.join(&self.source));
        self.sass.normalize(root);
    }

    /// Validate build configuration.
    ///
    /// # Checks
    /// - `entries` is not empty
    /// - each entry is a bare `.scss` file name
    /// - entries are unique (every entry owns its output paths)
    /// - `source` is an existing directory
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.entries.is_empty() {
            diag.error_with_hint(
                Self::ENTRIES,
                "no entries to build",
                format!("list at least one stylesheet in {}", Self::ENTRIES),
            );
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !is_bare_file_name(entry) {
                diag.error_with_hint(
                    Self::ENTRIES,
                    format!("`{}` is not a file name", entry.display()),
                    format!("entries are looked up inside {}", Self::SOURCE),
                );
                continue;
            }

            if entry.extension().and_then(|e| e.to_str()) != Some(ENTRY_EXTENSION) {
                diag.error(
                    Self::ENTRIES,
                    format!("`{}` is not a .scss file", entry.display()),
                );
            }

            if !seen.insert(entry) {
                diag.error(
                    Self::ENTRIES,
                    format!("`{}` is listed more than once", entry.display()),
                );
            }
        }

        if !self.source.is_dir() {
            diag.error(
                Self::SOURCE,
                format!("source directory not found: {}", self.source.display()),
            );
        }

        self.sass.validate(diag);
    }
}
