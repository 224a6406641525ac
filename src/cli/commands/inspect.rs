use anyhow::Result;

use super::super::args::InspectCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_inspection;
use super::helper::{load_effective_config, read_source};
use crate::core::inspect as inspect_source;

pub fn inspect(cmd: InspectCommand) -> Result<ExitStatus> {
    let config = load_effective_config(&cmd.common, None)?;
    let text = read_source(&cmd.file)?;

    let inspection = inspect_source(&text, &cmd.file.to_string_lossy(), cmd.line, &config);
    print_inspection(&inspection, &cmd.file);
    Ok(ExitStatus::Success)
}
