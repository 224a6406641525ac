use anyhow::Result;

use super::super::args::ExtractAllCommand;
use super::super::exit_status::ExitStatus;
use super::helper::{finish, load_effective_config, read_source};
use crate::core::extract_all as extract_all_styles;

pub fn extract_all(cmd: ExtractAllCommand) -> Result<ExitStatus> {
    let config = load_effective_config(&cmd.common, Some(&cmd.style))?;
    let text = read_source(&cmd.file)?;

    let file_path = cmd.file.to_string_lossy();
    let outcome = extract_all_styles(&text, &file_path, &config)?;
    finish(outcome, &cmd.file, cmd.apply)
}
