//! Entry processing with side effects (compile, write, minify, write).

use std::fs;
use std::path::Path;

use crate::log;
use crate::logger::ProgressLine;
use crate::utils::path::display_relative;

use super::{BuildError, OutputRoute, SassOptions, compile_scss, minify_css};

/// Outputs produced for one entry.
#[derive(Debug, Clone)]
pub struct CompiledEntry {
    pub route: OutputRoute,
    /// Expanded CSS text, as written to `route.expanded`.
    pub expanded: String,
    /// Minified CSS text, as written to `route.minified`.
    pub minified: String,
}

/// Compile one source stylesheet and write its outputs next to it.
///
/// Order: compile, write `name.css`, minify, write `name.min.css`.
/// Nothing is written when compilation fails.
pub fn process_entry(
    source: &Path,
    options: &SassOptions,
    root: &Path,
    progress: Option<&ProgressLine>,
) -> Result<CompiledEntry, BuildError> {
    let route = OutputRoute::from_source(source);

    let expanded = compile_scss(&route.source, options)?;
    write_output(&route.expanded, &expanded)?;
    log!("sass"; "{}", display_relative(&route.expanded, root));
    if let Some(p) = progress {
        p.inc("sass");
    }

    let minified = minify_css(&expanded, &route.expanded)?;
    write_output(&route.minified, &minified)?;
    log!("minify"; "{}", display_relative(&route.minified, root));
    if let Some(p) = progress {
        p.inc("minify");
    }

    Ok(CompiledEntry {
        route,
        expanded,
        minified,
    })
}

fn write_output(path: &Path, content: &str) -> Result<(), BuildError> {
    fs::write(path, content).map_err(|e| BuildError::filesystem(path, e))
}
