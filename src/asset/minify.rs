//! CSS minification.
//!
//! Uses lightningcss: parse, apply minify transforms, print compact.
//!
//! Transforms are limited to syntax the expanded output already works in,
//! so the minified file renders the same in the same browsers. Without a
//! target set lightningcss assumes evergreen browsers and rewrites e.g.
//! `(min-width: 40em)` to `(width>=40em)` and `rgba(0,0,0,.5)` to `#00000080`.

use std::path::Path;

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use lightningcss::targets::{Browsers, Features, Targets};

use super::BuildError;

/// Encode a browser version the way lightningcss expects.
const fn version(major: u32, minor: u32) -> Option<u32> {
    Some((major << 16) | (minor << 8))
}

/// Oldest browsers the minified output must keep working in.
const BASELINE: Browsers = Browsers {
    android: None,
    chrome: version(49, 0),
    edge: version(14, 0),
    firefox: version(45, 0),
    ie: None,
    ios_saf: version(9, 0),
    opera: version(36, 0),
    safari: version(9, 0),
    samsung: version(5, 0),
};

/// Minification targets. Vendor prefixes are never added.
fn targets() -> Targets {
    Targets {
        browsers: Some(BASELINE),
        exclude: Features::VendorPrefixes,
        ..Targets::default()
    }
}

/// Minify CSS source code.
///
/// `path` only labels diagnostics; nothing is read from disk.
pub fn minify_css(source: &str, path: &Path) -> Result<String, BuildError> {
    let options = ParserOptions {
        filename: path.display().to_string(),
        ..ParserOptions::default()
    };

    let mut stylesheet =
        StyleSheet::parse(source, options).map_err(|e| BuildError::minification(path, e))?;
    let targets = targets();
    stylesheet
        .minify(MinifyOptions {
            targets,
            ..MinifyOptions::default()
        })
        .map_err(|e| BuildError::minification(path, e))?;

    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            targets,
            ..PrinterOptions::default()
        })
        .map_err(|e| BuildError::minification(path, e))?;
    Ok(result.code)
}
