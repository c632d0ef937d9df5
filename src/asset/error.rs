//! Build pipeline error types.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while turning one entry into its outputs.
///
/// None of them are recovered locally: the first one aborts the build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to compile `{path}`\n{message}")]
    Compilation { path: PathBuf, message: String },

    #[error("source stylesheet not found: `{path}`")]
    SourceNotFound { path: PathBuf },

    #[error("IO error when writing `{path}`")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to minify `{path}`: {message}")]
    Minification { path: PathBuf, message: String },
}

impl BuildError {
    pub fn compilation(path: &Path, err: impl Display) -> Self {
        Self::Compilation {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn filesystem(path: &Path, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn minification(path: &Path, err: impl Display) -> Self {
        Self::Minification {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
