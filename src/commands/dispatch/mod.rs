//! Command dispatch logic for assay

use std::time::Instant;

use crate::cli::Cli;
use assay_core::error::Result;

mod command;

pub use command::CommandContext;

use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
