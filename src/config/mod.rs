//! Build configuration for `flowcss.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   └── build/     # [build] and [build.sass]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # FlowConfig (this file)
//! ```
//!
//! The config file is optional. Without one, the built-in entry list is
//! built from `src/` under the working directory.

pub mod section;
pub mod types;
mod util;

use util::{CONFIG_FILE, find_config_file};

pub use section::BuildSectionConfig;
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands, EntryArgs},
    debug, elog,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing flowcss.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlowConfig {
    /// Path to the config file, `None` when running on defaults (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl FlowConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for `flowcss.toml` unless `--config` is given.
    /// The project root is the config file's parent directory, or cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration as if started in `cwd`.
    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let config_path = Self::resolve_config_path(cli, cwd)?;

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        let root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);

        config.config_path = config_path;
        config.finalize(cli, &root);

        match &config.config_path {
            Some(path) => debug!("config"; "loaded {}", path.display()),
            None => debug!("config"; "no {} found, using defaults", CONFIG_FILE),
        }

        config.validate()?;
        Ok(config)
    }

    /// Resolve config file path.
    ///
    /// An explicit `--config` must exist; the implicit one is optional.
    fn resolve_config_path(cli: &Cli, cwd: &Path) -> Result<Option<PathBuf>> {
        match &cli.config {
            Some(path) => {
                let path = cwd.join(path);
                if !path.is_file() {
                    return Err(ConfigError::Io(
                        path,
                        io::Error::new(io::ErrorKind::NotFound, "config file not found"),
                    )
                    .into());
                }
                Ok(Some(path))
            }
            None => Ok(find_config_file(cwd, Path::new(CONFIG_FILE))),
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli, root: &Path) {
        self.root = crate::utils::path::normalize_path(root);
        self.apply_command_options(cli);

        let root = self.root.clone();
        self.build.normalize(&root);
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        elog!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Absolute paths of every entry, in build order.
    pub fn entries(&self) -> Vec<PathBuf> {
        self.build.entry_paths().collect()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Clean { entry_args, .. } => self.apply_entry_args(entry_args),
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        // Set verbose mode globally
        crate::logger::set_verbose(args.verbose);

        self.apply_entry_args(&args.entry_args);
    }

    /// Apply source/entry overrides. A non-empty `--entry` list replaces the configured one.
    fn apply_entry_args(&mut self, args: &EntryArgs) {
        Self::update_option(&mut self.build.source, args.source.as_ref());
        if !args.entries.is_empty() {
            self.build.entries = args.entries.clone();
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.build.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> FlowConfig {
    let (parsed, ignored) = FlowConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("flowcss").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = FlowConfig::parse_with_ignored("[build\nsource = \"src\"").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[build]\nsource = \"src\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = FlowConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.build.source, PathBuf::from("src"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_load_without_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();

        let config = FlowConfig::load_from(&cli(&["build"]), dir.path()).unwrap();

        assert!(config.config_path.is_none());
        let src = crate::utils::path::normalize_path(&dir.path().join("src"));
        assert_eq!(
            config.entries(),
            vec![
                src.join("flow-utilities.scss"),
                src.join("flow-utilities-bootstrap.scss"),
                src.join("flow-utilities-tailwindcss.scss"),
            ]
        );
    }

    #[test]
    fn test_load_finds_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let styles = dir.path().join("styles");
        fs::create_dir(&styles).unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[build]\nsource = \"styles\"\nentries = [\"flow-utilities.scss\"]\n",
        )
        .unwrap();

        let config = FlowConfig::load_from(&cli(&["build"]), &styles).unwrap();

        assert!(config.config_path.is_some());
        assert_eq!(
            config.entries(),
            vec![crate::utils::path::normalize_path(&styles).join("flow-utilities.scss")]
        );
    }

    #[test]
    fn test_cli_overrides_config() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::create_dir(dir.path().join("other")).unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[build]\nentries = [\"flow-utilities.scss\"]\n",
        )
        .unwrap();

        let config =
            FlowConfig::load_from(&cli(&["build", "-s", "other", "-e", "only.scss"]), dir.path())
                .unwrap();

        assert_eq!(config.build.entries, vec![PathBuf::from("only.scss")]);
        assert!(config.build.source.ends_with("other"));
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let err = FlowConfig::load_from(&cli(&["-C", "missing.toml", "build"]), dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_load_reports_validation_errors() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[build]\nsource = \"nowhere\"\nentries = []\n",
        )
        .unwrap();

        let err = FlowConfig::load_from(&cli(&["clean"]), dir.path()).unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 2);
    }
}
