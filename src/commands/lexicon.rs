//! `assay lexicon` command - show the effective lexicon registry

use assay_core::error::Result;
use assay_core::format::OutputFormat;
use assay_core::lexicon::{Category, Lexicon, LexiconRegistry};

use crate::commands::dispatch::CommandContext;

fn human_line(label: &str, lexicon: &Lexicon) -> String {
    format!("{} ({}): {}", label, lexicon.len(), lexicon.tokens().join(", "))
}

fn lines(registry: &LexiconRegistry, format: OutputFormat) -> Vec<String> {
    let mut out = Vec::new();
    match format {
        OutputFormat::Records => {
            for category in Category::ALL {
                let lexicon = registry.category(category);
                out.extend(lexicon.tokens().iter().map(|t| format!("L {} \"{}\"", category, t)));
            }
            for approach in registry.approaches() {
                out.extend(
                    approach
                        .tokens()
                        .iter()
                        .map(|t| format!("A \"{}\" \"{}\"", approach.name(), t)),
                );
            }
        }
        _ => {
            out.push("Categories:".to_string());
            for category in Category::ALL {
                let label = format!("  {} [{}%]", category, category.weight());
                out.push(human_line(&label, registry.category(category)));
            }
            out.push("Approaches:".to_string());
            for approach in registry.approaches() {
                out.push(human_line(&format!("  {}", approach.name()), approach));
            }
        }
    }
    out
}

/// Execute the lexicon command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.load_config(None)?;
    let registry = config.lexicon_registry()?;

    if ctx.cli.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&registry)?);
        return Ok(());
    }

    for line in lines(&registry, ctx.cli.format) {
        println!("{}", line);
    }
    Ok(())
}
