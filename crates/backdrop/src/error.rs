//! Error types for theme loading and validation.
//!
//! The resolution pipeline itself is total and has no error type: unknown
//! tokens pass through and unclassifiable colors simply skip contrast
//! inference. Only configuration surfaces can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading or validating a [`Theme`](crate::Theme).
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme document could not be parsed.
    #[error("failed to parse theme{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// The theme file could not be read.
    #[error("failed to read theme {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not a supported theme format.
    #[error("unsupported theme format: {} (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// `refresh` was called on a theme that was not loaded from a file.
    #[error("cannot refresh: theme has no source file")]
    NoSource,

    /// Color tokens reference each other in a loop.
    #[error("cycle detected in theme colors: {}", .path.join(" -> "))]
    ColorCycle { path: Vec<String> },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
