//! Scratch directory for normalized icons.
//!
//! Staged files are named only by ordinal (`icon_<n>.svg`), so the font
//! compiler never sees the original names and cannot derive codepoints from
//! them.

use std::{
    fs::{create_dir_all, remove_dir_all, write},
    path::{Path, PathBuf},
};

use iconfont_compiler::staged_file_name;
use log::{debug, warn};

use crate::{
    error::{Error, Result},
    normalize::NormalizedIcon,
};

/// A staging directory that is removed when dropped.
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
}

impl StagingDir {
    /// Create `path`, discarding anything left there by an earlier run.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            remove_dir_all(&path).map_err(|source| Error::Write { path: path.clone(), source })?;
        }
        create_dir_all(&path).map_err(|source| Error::Write { path: path.clone(), source })?;
        debug!("Created staging directory {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `icon` under its ordinal-derived name.
    pub fn write(&self, icon: &NormalizedIcon) -> Result<PathBuf> {
        let path = self.path.join(staged_file_name(icon.ordinal()));
        write(&path, icon.markup()).map_err(|source| Error::Write { path: path.clone(), source })?;
        Ok(path)
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        match remove_dir_all(&self.path) {
            Ok(()) => debug!("Removed staging directory {}", self.path.display()),
            Err(e) => warn!("Failed to remove staging directory {}: {e}", self.path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use super::*;
    use crate::{loader::load_icons, normalize::normalize_icon};

    fn normalized(count: usize) -> (tempfile::TempDir, Vec<NormalizedIcon>) {
        let input = tempfile::tempdir().unwrap();
        for name in ["zebra", "apple", "mango"].iter().take(count) {
            write(input.path().join(format!("{name}.svg")), "<svg/>").unwrap();
        }
        let icons = load_icons(input.path())
            .unwrap()
            .iter()
            .map(|entry| normalize_icon(entry, b"<svg/>"))
            .collect();
        (input, icons)
    }

    #[test]
    fn test_files_are_named_by_ordinal() {
        let (_input, icons) = normalized(3);
        let scratch = tempfile::tempdir().unwrap();
        let staging = StagingDir::create(scratch.path().join(".temp_icons")).unwrap();

        for icon in &icons {
            staging.write(icon).unwrap();
        }

        for (i, icon) in icons.iter().enumerate() {
            let staged = staging.path().join(format!("icon_{i}.svg"));
            assert_eq!(read_to_string(staged).unwrap(), icon.markup());
        }
    }

    #[test]
    fn test_directory_removed_on_drop() {
        let scratch = tempfile::tempdir().unwrap();
        let path = scratch.path().join(".temp_icons");
        {
            let staging = StagingDir::create(&path).unwrap();
            let (_input, icons) = normalized(1);
            staging.write(&icons[0]).unwrap();
            assert!(path.is_dir());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_directory_removed_on_early_return() {
        fn failing_step(path: &Path) -> Result<()> {
            let _staging = StagingDir::create(path)?;
            Err(Error::NoIconsFound { path: path.to_path_buf() })
        }

        let scratch = tempfile::tempdir().unwrap();
        let path = scratch.path().join(".temp_icons");
        assert!(failing_step(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_stale_directory_is_replaced() {
        let scratch = tempfile::tempdir().unwrap();
        let path = scratch.path().join(".temp_icons");
        create_dir_all(&path).unwrap();
        write(path.join("icon_7.svg"), "stale").unwrap();

        let staging = StagingDir::create(&path).unwrap();
        assert!(!staging.path().join("icon_7.svg").exists());
    }
}
