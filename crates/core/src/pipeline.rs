//! One end-to-end run: icons in, font + Dart binding + README out.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use iconfont_compiler::{CompileOptions, compile_dir};
use log::{debug, info};

use crate::{
    binding::render_binding,
    codepoints::CodepointTable,
    config::{BASE_CODEPOINT, Config},
    error::Result,
    identifiers::{IdentifierSet, class_name},
    io::{
        OutputLayout, check_output_dir, default_output_dir, dir_name, read_file,
        resolve_input_dir, write_file,
    },
    loader::{IconEntry, load_icons},
    normalize::normalize_icon,
    progress::{NoProgress, Progress},
    quiet::QuietLogs,
    readme::render_readme,
    staging::StagingDir,
};

const TOTAL_STEPS: usize = 4;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub class_name: String,
    pub output_dir: PathBuf,
    pub font_file: PathBuf,
    pub binding_file: PathBuf,
    pub readme_file: PathBuf,
    pub icon_count: usize,
    /// Icons replaced by the fallback glyph.
    pub fallback_count: usize,
}

/// Run the whole pipeline for `config`.
pub fn run(config: &Config) -> Result<RunSummary> {
    run_with_progress(config, &NoProgress)
}

/// Run the whole pipeline, reporting each step to `progress`.
///
/// Input validation, discovery and the codepoint range check all happen
/// before the output directory is touched.
pub fn run_with_progress(config: &Config, progress: &dyn Progress) -> Result<RunSummary> {
    let input_dir = resolve_input_dir(&config.input_dir)?;
    let class_name = class_name(dir_name(&input_dir)?);
    let output_dir = match &config.output_dir {
        Some(dir) => dir.clone(),
        None => default_output_dir(&input_dir)?,
    };
    check_output_dir(&output_dir, &input_dir)?;
    let layout = OutputLayout::new(output_dir, &class_name);

    let entries = run_step(progress, "Processing SVG files", 1, || load_icons(&input_dir))?;
    let codepoints = CodepointTable::new(entries.len())?;

    layout.prepare()?;

    let fallback_count = run_step(progress, "Generating icon font", 2, || {
        compile_font(&input_dir, &entries, &layout, &class_name)
    })?;

    run_step(progress, "Generating Dart class", 3, || {
        let ids = IdentifierSet::generate(class_name.as_str(), &entries);
        write_file(&layout.binding_file, render_binding(&ids, &codepoints))
    })?;

    run_step(progress, "Generating documentation", 4, || {
        write_file(&layout.readme_file, render_readme(&class_name))
    })?;

    Ok(RunSummary {
        class_name,
        output_dir: layout.root,
        font_file: layout.font_file,
        binding_file: layout.binding_file,
        readme_file: layout.readme_file,
        icon_count: entries.len(),
        fallback_count,
    })
}

/// Normalize and stage every icon, compile the staged set, write the font.
///
/// Returns the number of icons that fell back to the placeholder glyph.
fn compile_font(
    input_dir: &Path,
    entries: &[IconEntry],
    layout: &OutputLayout,
    class_name: &str,
) -> Result<usize> {
    let staging = StagingDir::create(&layout.staging_dir)?;

    let mut fallback_count = 0;
    for entry in entries {
        let raw = read_file(&input_dir.join(entry.relative_path()))?;
        let icon = normalize_icon(entry, &raw);
        if icon.is_fallback() {
            fallback_count += 1;
        }
        staging.write(&icon)?;
    }

    let options = CompileOptions::new(class_name).with_start_codepoint(BASE_CODEPOINT);
    let font = {
        let _quiet = QuietLogs::enter();
        compile_dir(staging.path(), &options)?
    };
    debug_assert_eq!(font.icon_count, entries.len());

    for warning in &font.warnings {
        debug!("Font compiler: {warning}");
    }

    write_file(&layout.font_file, &font.data)?;
    Ok(fallback_count)
}

/// Run a named pipeline step with timing.
fn run_step<T>(
    progress: &dyn Progress,
    name: &str,
    step: usize,
    f: impl FnOnce() -> Result<T>,
) -> Result<T> {
    info!("[{step}/{TOTAL_STEPS}] {name}");
    progress.step(step, TOTAL_STEPS, name);
    let start = Instant::now();
    let value = f()?;
    let elapsed = start.elapsed();
    info!("  ✓ {name} ({:.2}s)", elapsed.as_secs_f64());
    progress.step_done(name, elapsed);
    Ok(value)
}
