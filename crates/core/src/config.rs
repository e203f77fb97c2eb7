//! Configuration constants and run settings.

use std::path::PathBuf;

/// Codepoint of the first icon. Bindings count up from here in load order.
pub const BASE_CODEPOINT: u32 = 0xE900;

/// Last codepoint of the Basic Multilingual Plane Private Use Area.
pub const PRIVATE_USE_AREA_END: u32 = 0xF8FF;

/// Number of icons that fit between [`BASE_CODEPOINT`] and [`PRIVATE_USE_AREA_END`].
pub const MAX_ICONS: usize = (PRIVATE_USE_AREA_END - BASE_CODEPOINT + 1) as usize;

/// Extension of recognized icon files (matched case-insensitively).
pub const ICON_EXTENSION: &str = "svg";

/// Viewbox injected into icons that declare none.
pub const DEFAULT_VIEWBOX: &str = "0 0 24 24";

/// Fill injected into icons that declare none.
pub const DEFAULT_FILL: &str = "currentColor";

/// Placeholder shape (a filled triangle) for icons that fail normalization.
pub const FALLBACK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M12 2L2 22h20L12 2z"/></svg>"#;

/// Suffix of the default output directory, created next to the input.
pub const OUTPUT_SUFFIX: &str = "-flutter";

/// Scratch directory (inside the output directory) for staged icons.
pub const STAGING_DIR_NAME: &str = ".temp_icons";

/// Subdirectory of the output holding the font binary.
pub const FONTS_DIR_NAME: &str = "fonts";

/// Name of the generated usage guide.
pub const README_FILE_NAME: &str = "README.md";

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for icons.
    pub input_dir: PathBuf,
    /// Output directory; `None` means `<input>-flutter` next to the input.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self { input_dir: input_dir.into(), output_dir: None }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }
}
