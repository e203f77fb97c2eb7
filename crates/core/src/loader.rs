//! Icon discovery.
//!
//! Entries are sorted by relative path. That order is the only one used
//! downstream: ordinals, codepoints, staged file names and constant names all
//! derive from it.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, glob_with};
use log::{debug, info};

use crate::{
    config::ICON_EXTENSION,
    error::{Error, Result},
};

/// One discovered icon file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    relative_path: PathBuf,
    ordinal: usize,
    base_name: String,
}

impl IconEntry {
    /// Path relative to the input root.
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Position in load order.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// File name without extension.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }
}

/// Find every icon file under `root`, at any depth.
///
/// Hidden files and directories are skipped; the extension match ignores case.
pub fn load_icons(root: &Path) -> Result<Vec<IconEntry>> {
    let invalid = |reason: String| Error::InvalidInputPath { path: root.to_path_buf(), reason };

    let root_str = root.to_str().ok_or_else(|| invalid("path is not valid UTF-8".into()))?;
    let pattern = format!("{}/**/*.{ICON_EXTENSION}", Pattern::escape(root_str));
    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut relative_paths: Vec<PathBuf> = glob_with(&pattern, options)
        .map_err(|e| invalid(format!("bad glob pattern: {e}")))?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                debug!("Skipping unreadable path: {e}");
                None
            }
        })
        .filter(|path| path.is_file())
        .filter_map(|path| path.strip_prefix(root).ok().map(Path::to_path_buf))
        .collect();

    if relative_paths.is_empty() {
        return Err(Error::NoIconsFound { path: root.to_path_buf() });
    }

    relative_paths.sort();
    info!("Found {} icons in {}", relative_paths.len(), root.display());

    Ok(relative_paths
        .into_iter()
        .enumerate()
        .map(|(ordinal, relative_path)| {
            let base_name = relative_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            IconEntry { relative_path, ordinal, base_name }
        })
        .collect())
}
