//! SCSS compilation.
//!
//! Uses rsass with the `Expanded` output style: one declaration per line,
//! two-space indentation.

use std::path::{Path, PathBuf};

use rsass::input::FsContext;
use rsass::output::{Format, Style};

use super::BuildError;

/// Options passed to the stylesheet compiler.
#[derive(Debug, Clone, Default)]
pub struct SassOptions {
    /// Extra directories searched for `@import`/`@use` targets.
    pub load_paths: Vec<PathBuf>,
}

impl SassOptions {
    fn format() -> Format {
        Format {
            style: Style::Expanded,
            ..Default::default()
        }
    }
}

/// Compile a stylesheet file (and everything it imports) to expanded CSS.
///
/// A missing source yields `SourceNotFound`; syntax errors and unresolved
/// imports yield `Compilation`.
pub fn compile_scss(path: &Path, options: &SassOptions) -> Result<String, BuildError> {
    if !path.is_file() {
        return Err(BuildError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let (context, source) =
        FsContext::for_path(path).map_err(|e| BuildError::compilation(path, e))?;
    let mut context = context.with_format(SassOptions::format());
    for dir in &options.load_paths {
        context.push_path(dir);
    }

    let css = context
        .transform(source)
        .map_err(|e| BuildError::compilation(path, e))?;

    String::from_utf8(css).map_err(|e| BuildError::compilation(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_compile_expanded_style() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.scss", ".a { color: red; }");

        let css = compile_scss(&path, &SassOptions::default()).unwrap();
        assert!(css.contains(".a {\n  color: red;\n}"), "got: {css:?}");
    }

    #[test]
    fn test_compile_nesting_and_variables() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "nested.scss",
            "$gap: 1rem;\n.flow { > * + * { margin-top: $gap; } }",
        );

        let css = compile_scss(&path, &SassOptions::default()).unwrap();
        assert!(css.contains(".flow > * + *"));
        assert!(css.contains("margin-top: 1rem;"));
    }

    #[test]
    fn test_compile_resolves_relative_import() {
        let dir = TempDir::new().unwrap();
        write(&dir, "_vars.scss", "$accent: blue;");
        let path = write(&dir, "main.scss", "@import 'vars';\n.b { color: $accent; }");

        let css = compile_scss(&path, &SassOptions::default()).unwrap();
        assert!(css.contains("color: blue;"));
    }

    #[test]
    fn test_compile_resolves_import_from_load_path() {
        let dir = TempDir::new().unwrap();
        let vendor = dir.path().join("vendor");
        fs::create_dir(&vendor).unwrap();
        fs::write(vendor.join("_theme.scss"), "$fg: green;").unwrap();
        let path = write(&dir, "main.scss", "@import 'theme';\n.c { color: $fg; }");

        let options = SassOptions {
            load_paths: vec![vendor],
        };
        let css = compile_scss(&path, &options).unwrap();
        assert!(css.contains("color: green;"));
    }

    #[test]
    fn test_compile_syntax_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.scss", ".a { color: red;");

        let err = compile_scss(&path, &SassOptions::default()).unwrap_err();
        assert!(matches!(err, BuildError::Compilation { .. }));
    }

    #[test]
    fn test_compile_missing_import() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "main.scss", "@import 'nowhere';");

        let err = compile_scss(&path, &SassOptions::default()).unwrap_err();
        assert!(matches!(err, BuildError::Compilation { .. }));
    }

    #[test]
    fn test_compile_missing_source() {
        let dir = TempDir::new().unwrap();
        let err = compile_scss(&dir.path().join("absent.scss"), &SassOptions::default())
            .unwrap_err();
        assert!(matches!(err, BuildError::SourceNotFound { .. }));
    }
}
