//! Stylesheet compiler configuration.
//!
//! ```toml
//! [build.sass]
//! load_paths = ["node_modules", "vendor/scss"]
//! ```

use crate::asset::SassOptions;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SassConfig {
    /// Extra import search paths (relative to project root).
    pub load_paths: Vec<PathBuf>,
}

impl SassConfig {
    pub const LOAD_PATHS: FieldPath = FieldPath::new("build.sass.load_paths");

    pub fn normalize(&mut self, root: &Path) {
        self.load_paths = self
            .load_paths
            .iter()
            .map(|p| crate::utils::path::normalize_path(&root.join(p)))
            .collect();
    }

    /// Every load path must be an existing directory.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for path in &self.load_paths {
            if !path.is_dir() {
                diag.error(
                    Self::LOAD_PATHS,
                    format!("load path is not a directory: {}", path.display()),
                );
            }
        }
    }

    /// Compiler options for the asset pipeline.
    pub fn options(&self) -> SassOptions {
        SassOptions {
            load_paths: self.load_paths.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_load_paths() {
        let config = test_parse_config("[build.sass]\nload_paths = [\"node_modules\"]");
        assert_eq!(
            config.build.sass.load_paths,
            vec![PathBuf::from("node_modules")]
        );
    }

    #[test]
    fn test_normalize_and_validate() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("vendor")).unwrap();

        let mut sass = SassConfig {
            load_paths: vec!["vendor".into(), "missing".into()],
        };
        sass.normalize(dir.path());
        assert!(sass.load_paths.iter().all(|p| p.is_absolute()));

        let mut diag = ConfigDiagnostics::new();
        sass.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(sass.options().load_paths.len(), 2);
    }
}
