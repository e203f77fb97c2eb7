//! Interactive prompt for the input folder.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dialoguer::{Input, theme::ColorfulTheme};

/// Ask for the icon folder until the answer names an existing path.
pub fn prompt_input_dir() -> Result<PathBuf> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter the path to your SVG icons folder")
        .validate_with(|input: &String| validate_input(input))
        .interact_text()
        .context("Failed to read input folder")?;
    Ok(PathBuf::from(answer.trim()))
}

fn validate_input(input: &str) -> Result<(), &'static str> {
    let input = input.trim();
    if input.is_empty() {
        Err("Please enter a valid path")
    } else if !Path::new(input).exists() {
        Err("Directory does not exist")
    } else {
        Ok(())
    }
}
