//! # Icon Font Compiler
//!
//! Compile a directory of index-named SVG icons (`icon_0.svg`, `icon_1.svg`,
//! ...) into a TrueType font.
//!
//! Glyph order follows the numeric index in the file name, never the
//! directory listing order or any other part of the file name, so the
//! codepoint of `icon_<n>.svg` is always `start_codepoint + n`.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use iconfont_compiler::{CompileOptions, compile_dir};
//!
//! let font = compile_dir(Path::new("staged"), &CompileOptions::new("Icons")).unwrap();
//! std::fs::write("Icons.ttf", font.data).unwrap();
//! ```

mod error;
mod outline;
mod tables;

use std::{
    fs::{read_dir, read_to_string},
    path::{Path, PathBuf},
};

use log::{debug, info};
use write_fonts::tables::glyf::{Glyph, SimpleGlyph};

pub use error::{Error, Result, Warning};
pub use outline::{IconOutline, outline_from_svg};

use tables::{GlyphEntry, build_font};

/// First codepoint of the Private Use Area block used for icon fonts.
pub const DEFAULT_START_CODEPOINT: u32 = 0xE900;

/// Default units per em; staged icons are scaled to this height.
pub const DEFAULT_FONT_HEIGHT: u16 = 1000;

const STAGED_PREFIX: &str = "icon_";
const STAGED_EXTENSION: &str = "svg";

/// Staged file name for the icon at `index`.
pub fn staged_file_name(index: usize) -> String {
    format!("{STAGED_PREFIX}{index}.{STAGED_EXTENSION}")
}

/// Parse the index out of a staged file name, if it follows the pattern.
pub fn parse_staged_index(file_name: &str) -> Option<usize> {
    let stem = file_name.strip_suffix(STAGED_EXTENSION)?.strip_suffix('.')?;
    let digits = stem.strip_prefix(STAGED_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Font compilation settings.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Family name written to the `name` table.
    pub font_name: String,
    /// Codepoint assigned to `icon_0.svg`.
    pub start_codepoint: u32,
    /// Units per em, also the target glyph height when normalizing.
    pub font_height: u16,
    /// Scale every icon so its viewport height equals `font_height`.
    pub normalize: bool,
}

impl CompileOptions {
    pub fn new(font_name: impl Into<String>) -> Self {
        Self {
            font_name: font_name.into(),
            start_codepoint: DEFAULT_START_CODEPOINT,
            font_height: DEFAULT_FONT_HEIGHT,
            normalize: true,
        }
    }

    pub fn with_start_codepoint(mut self, start_codepoint: u32) -> Self {
        self.start_codepoint = start_codepoint;
        self
    }

    pub fn with_font_height(mut self, font_height: u16) -> Self {
        self.font_height = font_height;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

/// A compiled font and the non-fatal warnings raised while building it.
#[derive(Debug, Clone)]
pub struct CompiledFont {
    pub data: Vec<u8>,
    /// Number of icon glyphs, excluding `.notdef`.
    pub icon_count: usize,
    pub warnings: Vec<Warning>,
}

/// Compile every `icon_<n>.svg` in `dir` into one TrueType font.
///
/// Indices must run from 0 without gaps. Other files are ignored.
pub fn compile_dir(dir: &Path, options: &CompileOptions) -> Result<CompiledFont> {
    let staged = list_staged(dir)?;
    info!("Compiling {} icons from {}", staged.len(), dir.display());

    let mut glyphs = Vec::with_capacity(staged.len() + 1);
    glyphs.push(GlyphEntry::notdef(options.font_height));
    let mut warnings = Vec::new();

    for (index, path) in &staged {
        let svg = read_to_string(path)
            .map_err(|source| Error::ReadIcon { path: path.clone(), source })?;
        let outline = outline_from_svg(&svg, options.font_height, options.normalize)
            .map_err(|e| Error::ParseSvg { path: path.clone(), message: e.to_string() })?;

        let glyph = if outline.is_empty() {
            let warning = Warning::EmptyGlyph { index: *index, path: path.clone() };
            log::warn!("{warning}");
            warnings.push(warning);
            Glyph::Empty
        } else {
            let simple = SimpleGlyph::from_bezpath(&outline.path)
                .map_err(|e| Error::Outline { path: path.clone(), message: format!("{e:?}") })?;
            Glyph::Simple(simple)
        };

        debug!(
            "icon {index}: {} contours, advance {}",
            outline.contour_count(),
            outline.advance
        );

        glyphs.push(GlyphEntry {
            name: format!("{STAGED_PREFIX}{index}"),
            glyph,
            advance: outline.advance,
            points: outline.point_count(),
            contours: outline.contour_count(),
        });
    }

    let data = build_font(&glyphs, options)?;
    info!("Built {} ({} bytes)", options.font_name, data.len());

    Ok(CompiledFont { data, icon_count: staged.len(), warnings })
}

/// Staged icons in `dir`, ordered by index.
fn list_staged(dir: &Path) -> Result<Vec<(usize, PathBuf)>> {
    let entries = read_dir(dir).map_err(|source| Error::ReadDir { path: dir.to_path_buf(), source })?;

    let mut staged = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::ReadDir { path: dir.to_path_buf(), source })?;
        let path = entry.path();
        let index = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(parse_staged_index);
        match index {
            Some(index) if path.is_file() => staged.push((index, path)),
            _ => debug!("Skipping {}", path.display()),
        }
    }

    if staged.is_empty() {
        return Err(Error::NoIcons(dir.to_path_buf()));
    }

    staged.sort_by_key(|(index, _)| *index);
    for (expected, (found, _)) in staged.iter().enumerate() {
        if *found != expected {
            return Err(Error::NonContiguous { expected, found: *found });
        }
    }

    Ok(staged)
}
