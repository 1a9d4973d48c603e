//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use assay_core::config::RubricConfig;
use assay_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Effective configuration: `--config`, then `assay.toml` in `dir`, then global
    pub fn load_config(&self, dir: Option<&Path>) -> Result<RubricConfig> {
        let config = RubricConfig::resolve(self.cli.config.as_deref(), dir)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_config");
        Ok(config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Assess {
                dir,
                output,
                stdout,
            } => commands::assess::execute(ctx, dir, output.as_deref(), *stdout),
            Commands::Score { file, sequence } => commands::score::execute(ctx, file, *sequence),
            Commands::Lexicon => commands::lexicon::execute(ctx),
        }
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("assay {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Rubric-driven first-pass feedback for student submissions.");
        println!();
        println!("Run `assay --help` for usage information.");
        Ok(())
    }
}
