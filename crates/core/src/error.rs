//! Error types for the icon font pipeline.

use std::path::PathBuf;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline-wide failures. Each one aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input path is missing, not a directory, or has no usable name.
    #[error("Invalid input path '{path}': {reason}")]
    InvalidInputPath { path: PathBuf, reason: String },

    /// The input directory holds no icon files.
    #[error("No SVG files found in '{path}'")]
    NoIconsFound { path: PathBuf },

    /// More icons than the private use area can address.
    #[error("Too many icons: found {count}, at most {max} fit in the private use area")]
    TooManyIcons { count: usize, max: usize },

    /// The output directory is the input directory or one of its ancestors.
    #[error("Output directory '{output}' would overwrite input '{input}'")]
    OutputOverlapsInput { output: PathBuf, input: PathBuf },

    /// The font compiler failed.
    #[error("Font compilation failed: {0}")]
    FontCompiler(#[from] iconfont_compiler::Error),

    /// Writing an output or staged file failed.
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading an input file or directory failed.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
