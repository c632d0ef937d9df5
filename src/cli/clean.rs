//! Removal of generated outputs.

use std::fs;

use anyhow::{Context, Result};

use crate::{
    asset::OutputRoute,
    config::FlowConfig,
    log,
    utils::{path::display_relative, plural_count},
};

/// Delete `name.css` and `name.min.css` of every entry.
///
/// Sources are never touched and missing outputs are skipped.
/// With `dry`, only lists what would be removed. Returns the number of
/// files removed (or that would be).
pub fn clean_outputs(config: &FlowConfig, dry: bool) -> Result<usize> {
    let root = config.get_root();
    let mut count = 0;

    for source in config.entries() {
        let route = OutputRoute::from_source(&source);
        for output in route.outputs() {
            if !output.is_file() {
                continue;
            }
            let shown = display_relative(output, root);
            if dry {
                log!("clean"; "would remove {}", shown);
            } else {
                fs::remove_file(output)
                    .with_context(|| format!("Failed to remove `{}`", output.display()))?;
                log!("clean"; "removed {}", shown);
            }
            count += 1;
        }
    }

    let verb = if dry { "would remove" } else { "removed" };
    log!("done"; "{} {}", verb, plural_count(count, "file"));
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildSectionConfig;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn config_for(dir: &Path) -> FlowConfig {
        FlowConfig {
            config_path: None,
            root: dir.to_path_buf(),
            build: BuildSectionConfig {
                source: dir.to_path_buf(),
                entries: vec![PathBuf::from("a.scss"), PathBuf::from("b.scss")],
                ..Default::default()
            },
        }
    }

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), "x").unwrap();
        }
    }

    #[test]
    fn test_clean_removes_outputs_only() {
        let dir = TempDir::new().unwrap();
        touch(
            dir.path(),
            &["a.scss", "a.css", "a.min.css", "b.scss", "b.css", "other.css"],
        );

        let removed = clean_outputs(&config_for(dir.path()), false).unwrap();

        assert_eq!(removed, 3);
        assert!(dir.path().join("a.scss").exists());
        assert!(dir.path().join("b.scss").exists());
        assert!(dir.path().join("other.css").exists());
        assert!(!dir.path().join("a.css").exists());
        assert!(!dir.path().join("a.min.css").exists());
        assert!(!dir.path().join("b.css").exists());
    }

    #[test]
    fn test_clean_dry_run_keeps_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), &["a.css", "a.min.css"]);

        let count = clean_outputs(&config_for(dir.path()), true).unwrap();

        assert_eq!(count, 2);
        assert!(dir.path().join("a.css").exists());
        assert!(dir.path().join("a.min.css").exists());
    }

    #[test]
    fn test_clean_nothing_to_do() {
        let dir = TempDir::new().unwrap();
        assert_eq!(clean_outputs(&config_for(dir.path()), false).unwrap(), 0);
    }
}
