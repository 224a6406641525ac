use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{extract::extract, extract_all::extract_all, init::init, inspect::inspect},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::ExtractAll(cmd)) => extract_all(cmd),
        Some(Command::Inspect(cmd)) => inspect(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
