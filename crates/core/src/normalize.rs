//! SVG markup normalization.
//!
//! Icons get a viewbox and a fill the font compiler can rely on. An icon that
//! cannot be normalized is replaced by [`FALLBACK_SVG`] so every entry still
//! produces exactly one glyph.

use std::str::{Utf8Error, from_utf8};

use log::warn;
use usvg::{Options, Tree};

use crate::{
    config::{DEFAULT_FILL, DEFAULT_VIEWBOX, FALLBACK_SVG},
    loader::IconEntry,
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Why an icon fell back to the placeholder glyph.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("not valid UTF-8: {0}")]
    NotUtf8(#[from] Utf8Error),

    #[error("no <svg> element")]
    MissingSvgTag,

    #[error("unparseable SVG: {0}")]
    Parse(#[from] usvg::Error),
}

/// Markup for one icon, ready for staging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedIcon {
    ordinal: usize,
    markup: String,
    fallback: bool,
}

impl NormalizedIcon {
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Whether the placeholder glyph replaced the original markup.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

/// Normalize the raw bytes of `entry`. Never fails.
pub fn normalize_icon(entry: &IconEntry, raw: &[u8]) -> NormalizedIcon {
    match normalize_markup(raw) {
        Ok(markup) => NormalizedIcon { ordinal: entry.ordinal(), markup, fallback: false },
        Err(e) => {
            warn!(
                "{}: {e}; using fallback glyph",
                entry.relative_path().display()
            );
            NormalizedIcon {
                ordinal: entry.ordinal(),
                markup: FALLBACK_SVG.to_string(),
                fallback: true,
            }
        }
    }
}

/// Inject a default viewbox and fill where missing, then check the result parses.
pub fn normalize_markup(raw: &[u8]) -> Result<String, NormalizeError> {
    let mut markup = from_utf8(raw)?.to_string();

    if !markup.contains("viewBox") {
        inject_root_attribute(&mut markup, "viewBox", DEFAULT_VIEWBOX)?;
    }
    if !markup.contains("fill=\"") && !markup.contains("fill:") {
        inject_root_attribute(&mut markup, "fill", DEFAULT_FILL)?;
    }
    // The SVG parser only recognizes the root element in the SVG namespace.
    if !markup.contains("xmlns") {
        inject_root_attribute(&mut markup, "xmlns", SVG_NAMESPACE)?;
    }

    Tree::from_str(&markup, &Options::default())?;
    Ok(markup)
}

/// Insert `name="value"` as the first attribute of the root `<svg>` tag.
fn inject_root_attribute(
    markup: &mut String,
    name: &str,
    value: &str,
) -> Result<(), NormalizeError> {
    let at = find_svg_tag_end(markup).ok_or(NormalizeError::MissingSvgTag)?;
    markup.insert_str(at, &format!(" {name}=\"{value}\""));
    Ok(())
}

/// Byte offset just past the root `<svg` tag name.
///
/// Comments, processing instructions and the doctype ahead of the root are
/// skipped. `None` when the root element is not `<svg>`.
fn find_svg_tag_end(markup: &str) -> Option<usize> {
    let mut pos = 0;
    while let Some(offset) = markup[pos..].find('<') {
        let start = pos + offset;
        let tail = &markup[start..];
        pos = if tail.starts_with("<!--") {
            start + tail.find("-->")? + "-->".len()
        } else if tail.starts_with("<?") {
            start + tail.find("?>")? + "?>".len()
        } else if tail.starts_with("<!") {
            start + declaration_len(tail)?
        } else {
            let next = tail.strip_prefix("<svg")?.chars().next()?;
            let end = start + "<svg".len();
            return (next.is_whitespace() || next == '>' || next == '/').then_some(end);
        };
    }
    None
}

/// Length of a `<!DOCTYPE ...>` declaration, internal subset included.
fn declaration_len(tail: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in tail.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '>' if depth == 0 => return Some(i + 1),
            _ => {}
        }
    }
    None
}
