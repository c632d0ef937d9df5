//! Stylesheet build orchestration.
//!
//! For each entry, strictly in order:
//! - **Compile** - SCSS → expanded CSS, written to `name.css`
//! - **Minify** - expanded CSS → minified CSS, written to `name.min.css`
//!
//! The first error aborts the run; later entries are not touched.

use std::io::IsTerminal;

use anyhow::Result;

use crate::{
    asset::{CompiledEntry, process_entry},
    config::FlowConfig,
    debug, log,
    logger::ProgressLine,
    utils::{path::display_relative, plural_count},
};

/// Build every configured entry.
///
/// Returns the compiled entries in build order.
pub fn build_entries(config: &FlowConfig, quiet: bool) -> Result<Vec<CompiledEntry>> {
    let entries = config.entries();
    let options = config.build.sass.options();
    let root = config.get_root();

    debug!("build"; "{} in {}", plural_count(entries.len(), "entry stylesheet"),
        display_relative(&config.build.source, root));

    let progress = create_progress(entries.len(), quiet);

    let mut compiled = Vec::with_capacity(entries.len());
    for source in &entries {
        debug!("build"; "compiling {}", display_relative(source, root));
        let entry = process_entry(source, &options, root, progress.as_ref())?;
        debug!("build"; "{}: {} bytes expanded, {} bytes minified",
            display_relative(&entry.route.source, root),
            entry.expanded.len(),
            entry.minified.len());
        compiled.push(entry);
    }

    if let Some(p) = progress {
        p.finish();
    }

    log!("done"; "build completed successfully!");
    Ok(compiled)
}

/// Create progress display if not quiet and stdout is a terminal
fn create_progress(count: usize, quiet: bool) -> Option<ProgressLine> {
    if quiet || !std::io::stdout().is_terminal() {
        return None;
    }
    Some(ProgressLine::new(&[("sass", count), ("minify", count)]))
}
