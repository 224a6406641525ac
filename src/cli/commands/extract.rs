use anyhow::Result;

use super::super::args::ExtractCommand;
use super::super::exit_status::ExitStatus;
use super::helper::{finish, load_effective_config, read_source};
use crate::core::{LineIndex, extract_one};

pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let config = load_effective_config(&cmd.common, Some(&cmd.style))?;
    let text = read_source(&cmd.file)?;

    let offset = match (cmd.offset, cmd.line, cmd.column) {
        (Some(offset), _, _) => offset.min(text.len()),
        (None, Some(line), Some(column)) => {
            LineIndex::new(&text).offset_at(line.saturating_sub(1), column.saturating_sub(1))
        }
        _ => anyhow::bail!("Either --offset or both --line and --column are required"),
    };

    let file_path = cmd.file.to_string_lossy();
    let outcome = extract_one(&text, &file_path, offset, cmd.name.as_deref(), &config)?;
    finish(outcome, &cmd.file, cmd.apply)
}
