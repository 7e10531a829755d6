//! Dispatch a parsed command line to its handler.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        audit::audit, draw::draw, init::init, languages::languages, missing::missing,
        overlays::overlays, resolve::resolve,
    },
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Audit(cmd)) => audit(cmd),
        Some(Command::Missing(cmd)) => missing(cmd),
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Draw(cmd)) => draw(cmd),
        Some(Command::Overlays(cmd)) => overlays(cmd),
        Some(Command::Languages) => languages(),
        Some(Command::Init(cmd)) => init(cmd),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
