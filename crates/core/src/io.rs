//! Output directory layout and file I/O helpers.

use std::{
    fs::{canonicalize, create_dir_all, read, remove_dir_all, write},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    binding::binding_file_name,
    config::{FONTS_DIR_NAME, OUTPUT_SUFFIX, README_FILE_NAME, STAGING_DIR_NAME},
    error::{Error, Result},
};

/// Paths of everything a run writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub root: PathBuf,
    pub fonts_dir: PathBuf,
    pub font_file: PathBuf,
    pub binding_file: PathBuf,
    pub readme_file: PathBuf,
    pub staging_dir: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>, class_name: &str) -> Self {
        let root = root.into();
        let fonts_dir = root.join(FONTS_DIR_NAME);
        Self {
            font_file: fonts_dir.join(format!("{class_name}.ttf")),
            binding_file: root.join(binding_file_name(class_name)),
            readme_file: root.join(README_FILE_NAME),
            staging_dir: root.join(STAGING_DIR_NAME),
            fonts_dir,
            root,
        }
    }

    /// Remove any previous output and create a fresh root and `fonts/`.
    pub fn prepare(&self) -> Result<()> {
        if self.root.exists() {
            debug!("Removing previous output {}", self.root.display());
            remove_dir_all(&self.root)
                .map_err(|source| Error::Write { path: self.root.clone(), source })?;
        }
        create_dir_all(&self.fonts_dir)
            .map_err(|source| Error::Write { path: self.fonts_dir.clone(), source })
    }
}

/// Resolve and validate the input directory.
pub fn resolve_input_dir(path: &Path) -> Result<PathBuf> {
    let invalid = |reason: &str| Error::InvalidInputPath {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    if path.as_os_str().is_empty() {
        return Err(invalid("path is empty"));
    }
    let resolved = canonicalize(path).map_err(|_| invalid("directory does not exist"))?;
    if !resolved.is_dir() {
        return Err(invalid("not a directory"));
    }
    Ok(resolved)
}

/// Base name of a resolved input directory.
pub fn dir_name(input_dir: &Path) -> Result<&str> {
    input_dir.file_name().and_then(|name| name.to_str()).ok_or_else(|| {
        Error::InvalidInputPath {
            path: input_dir.to_path_buf(),
            reason: "directory has no usable name".to_string(),
        }
    })
}

/// `<parent>/<name>-flutter` for an input directory `<parent>/<name>`.
pub fn default_output_dir(input_dir: &Path) -> Result<PathBuf> {
    let name = dir_name(input_dir)?;
    let parent = input_dir.parent().unwrap_or(input_dir);
    Ok(parent.join(format!("{name}{OUTPUT_SUFFIX}")))
}

/// Refuse output roots that would delete the input when cleared.
pub fn check_output_dir(output: &Path, input_dir: &Path) -> Result<()> {
    let resolved = canonicalize(output).unwrap_or_else(|_| output.to_path_buf());
    if input_dir.starts_with(&resolved) {
        return Err(Error::OutputOverlapsInput {
            output: output.to_path_buf(),
            input: input_dir.to_path_buf(),
        });
    }
    Ok(())
}

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    read(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

pub fn write_file(path: &Path, data: impl AsRef<[u8]>) -> Result<()> {
    write(path, data).map_err(|source| Error::Write { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = OutputLayout::new("/work/icons-flutter", "Icons");
        assert_eq!(layout.font_file, Path::new("/work/icons-flutter/fonts/Icons.ttf"));
        assert_eq!(layout.binding_file, Path::new("/work/icons-flutter/Icons_icons.dart"));
        assert_eq!(layout.readme_file, Path::new("/work/icons-flutter/README.md"));
        assert_eq!(layout.staging_dir, Path::new("/work/icons-flutter/.temp_icons"));
    }

    #[test]
    fn test_default_output_dir_is_sibling() {
        let output = default_output_dir(Path::new("/work/icons")).unwrap();
        assert_eq!(output, Path::new("/work/icons-flutter"));
    }

    #[test]
    fn test_resolve_input_dir_rejects_missing_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("home.svg");
        write(&file, "<svg/>").unwrap();

        assert!(matches!(
            resolve_input_dir(&dir.path().join("missing")),
            Err(Error::InvalidInputPath { .. })
        ));
        assert!(matches!(resolve_input_dir(&file), Err(Error::InvalidInputPath { .. })));
        assert!(matches!(resolve_input_dir(Path::new("")), Err(Error::InvalidInputPath { .. })));
        assert!(resolve_input_dir(dir.path()).is_ok());
    }

    #[test]
    fn test_prepare_replaces_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(dir.path().join("icons-flutter"), "Icons");
        create_dir_all(&layout.root).unwrap();
        write(layout.root.join("stale.txt"), "old").unwrap();

        layout.prepare().unwrap();
        assert!(layout.fonts_dir.is_dir());
        assert!(!layout.root.join("stale.txt").exists());
    }

    #[test]
    fn test_output_may_not_contain_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = resolve_input_dir(dir.path()).unwrap();

        assert!(check_output_dir(&input, &input).is_err());
        assert!(check_output_dir(input.parent().unwrap(), &input).is_err());
        assert!(check_output_dir(&input.join("out"), &input).is_ok());
    }
}
