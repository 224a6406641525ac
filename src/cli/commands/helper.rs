use std::{env, fs, path::Path};

use anyhow::{Context, Result};

use super::super::args::{CommonArgs, StyleArgs};
use super::super::exit_status::ExitStatus;
use super::super::report::{print_extracted, print_notice};
use crate::config::{Config, load_config};
use crate::core::Outcome;

/// Effective config for one run: the config file (or defaults) with CLI
/// overrides applied.
pub fn load_effective_config(common: &CommonArgs, style: Option<&StyleArgs>) -> Result<Config> {
    let start_dir = match &common.path {
        Some(path) => path.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let mut config = load_config(&start_dir)?.config;
    if let Some(style) = style {
        style.apply_to(&mut config);
    }
    config.validate()?;
    Ok(config)
}

pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read source file: {:?}", path))
}

/// Report an extraction outcome; with `apply` the rewritten text is written
/// back, otherwise it is printed.
pub fn finish(outcome: Outcome, path: &Path, apply: bool) -> Result<ExitStatus> {
    match outcome {
        Outcome::Skipped(notice) => {
            print_notice(&notice, path);
            Ok(ExitStatus::Failure)
        }
        Outcome::Extracted(extraction) => {
            if apply {
                fs::write(path, &extraction.text)
                    .with_context(|| format!("Failed to write source file: {:?}", path))?;
            } else {
                print!("{}", extraction.text);
            }
            print_extracted(&extraction, path, apply);
            Ok(ExitStatus::Success)
        }
    }
}
