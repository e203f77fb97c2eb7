//! CLI definition and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use iconfont_core::{Config, run_with_progress};

use crate::{prompt::prompt_input_dir, report::print_summary, spinner::Spinner};

#[derive(Parser, Debug)]
#[command(name = "iconfont")]
#[command(about = "Convert a folder of SVG icons into a Flutter icon font and Dart class")]
#[command(version)]
pub struct Cli {
    /// Folder of SVG icons. Prompted for when omitted.
    pub input: Option<PathBuf>,

    /// Output folder [default: <INPUT>-flutter next to the input]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = self.config()?;
        let spinner = Spinner::new();
        match run_with_progress(&config, &spinner) {
            Ok(summary) => {
                spinner.succeed("Successfully generated Flutter icons!");
                print_summary(&summary);
                Ok(())
            }
            Err(e) => {
                spinner.fail(&e.to_string());
                Err(e).with_context(|| {
                    format!("Failed to convert {}", config.input_dir.display())
                })
            }
        }
    }

    /// Build the run configuration, prompting for the input folder if needed.
    pub fn config(self) -> Result<Config> {
        let input = match self.input {
            Some(input) => input,
            None => prompt_input_dir()?,
        };
        let mut config = Config::new(input);
        if let Some(output) = self.output {
            config = config.with_output_dir(output);
        }
        Ok(config)
    }
}
