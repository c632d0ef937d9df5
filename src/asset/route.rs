//! Output route: source stylesheet → expanded and minified outputs.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Extension of the expanded output.
const CSS_EXT: &str = "css";

/// Suffix inserted before the extension of the minified output.
const MIN_SUFFIX: &str = "min";

/// Output paths for one entry.
///
/// Both outputs live next to the source: `dir/name.scss` maps to
/// `dir/name.css` and `dir/name.min.css`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRoute {
    /// Source stylesheet (absolute)
    pub source: PathBuf,
    /// Expanded CSS output
    pub expanded: PathBuf,
    /// Minified CSS output
    pub minified: PathBuf,
}

impl OutputRoute {
    pub fn from_source(source: &Path) -> Self {
        let dir = source.parent().unwrap_or_else(|| Path::new(""));
        let stem = source.file_stem().unwrap_or_default();

        Self {
            source: source.to_path_buf(),
            expanded: dir.join(with_suffix(stem, &[CSS_EXT])),
            minified: dir.join(with_suffix(stem, &[MIN_SUFFIX, CSS_EXT])),
        }
    }

    /// Both output paths, expanded first.
    pub fn outputs(&self) -> [&Path; 2] {
        [&self.expanded, &self.minified]
    }
}

fn with_suffix(stem: &OsStr, parts: &[&str]) -> OsString {
    let mut name = stem.to_os_string();
    for part in parts {
        name.push(".");
        name.push(part);
    }
    name
}
