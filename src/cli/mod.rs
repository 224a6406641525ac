//! Command-line interface layer.

use std::process::ExitCode;

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{
    Arguments, Command, CommonArgs, ExtractAllCommand, ExtractCommand, InspectCommand, StyleArgs,
};
pub use exit_status::ExitStatus;
pub use report::{FAILURE_MARK, SUCCESS_MARK};

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    run::run(args).map(Into::into)
}
