//! Error types for icon font compilation.

use std::path::PathBuf;

/// Result type for icon font compilation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a font compilation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to list the staging directory.
    #[error("Failed to read icon directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read a staged icon.
    #[error("Failed to read icon '{path}': {source}")]
    ReadIcon {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The SVG parser rejected a staged icon.
    #[error("Failed to parse SVG '{path}': {message}")]
    ParseSvg { path: PathBuf, message: String },

    /// An outline could not be turned into a TrueType glyph.
    #[error("Invalid outline in '{path}': {message}")]
    Outline { path: PathBuf, message: String },

    /// The directory contained no index-named icons.
    #[error("No icon_<n>.svg files found in '{0}'")]
    NoIcons(PathBuf),

    /// Icon indices have a gap, which would renumber every later codepoint.
    #[error("Icon indices are not contiguous: expected icon_{expected}.svg, found icon_{found}.svg")]
    NonContiguous { expected: usize, found: usize },

    /// Start codepoint plus glyph index left the Unicode scalar range.
    #[error("Codepoint {0:#X} is not a valid Unicode scalar value")]
    InvalidCodepoint(u32),

    /// More glyphs than a TrueType font can address.
    #[error("Too many glyphs for a TrueType font: {0}")]
    TooManyGlyphs(usize),

    /// The cmap could not be built from the codepoint mappings.
    #[error("Failed to build cmap table")]
    Cmap,

    /// Font builder error.
    #[error("Font builder error: {0}")]
    FontBuilder(#[from] write_fonts::BuilderError),

    /// Write error.
    #[error("Font write error: {0}")]
    WriteError(#[from] write_fonts::error::Error),
}

/// Non-fatal conditions reported alongside a successfully compiled font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The icon had no filled outline; it was compiled as an empty glyph.
    EmptyGlyph { index: usize, path: PathBuf },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::EmptyGlyph { index, path } => {
                write!(f, "icon {index} ({}) has no filled outline", path.display())
            }
        }
    }
}
