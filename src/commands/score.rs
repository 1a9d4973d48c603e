//! `assay score` command - assess one submission with its category breakdown

use std::path::Path;

use assay_core::analysis::AnalysisResult;
use assay_core::error::{AssayError, Result};
use assay_core::extract::extract_text;
use assay_core::format::{escape_quotes, OutputFormat};
use assay_core::lexicon::Category;
use assay_core::pipeline::assess_detailed;
use assay_core::render::{render_records, render_section};
use assay_core::submission::Submission;

use crate::commands::dispatch::CommandContext;

fn breakdown_lines(analysis: &AnalysisResult) -> Vec<String> {
    let mut lines = Vec::new();
    for category in Category::ALL {
        let m = analysis.category(category);
        let matched: Vec<&str> = m.matched.iter().map(String::as_str).collect();
        lines.push(format!(
            "{:<22} {:>5.3}  ({}/{}) {}",
            category.label(),
            m.score,
            m.matched.len(),
            m.lexicon_size,
            matched.join(", ")
        ));
    }
    let approaches = if analysis.approaches.is_empty() {
        "none".to_string()
    } else {
        analysis.approaches.join(", ")
    };
    lines.push(format!("Approaches: {}", approaches));
    lines.push(format!("Words: {}", analysis.word_count));
    lines
}

fn breakdown_records(analysis: &AnalysisResult) -> Vec<String> {
    Category::ALL
        .iter()
        .map(|category| {
            let m = analysis.category(*category);
            let matched: Vec<&str> = m.matched.iter().map(String::as_str).collect();
            format!(
                "M {} score={:.3} matched={}/{} tokens=\"{}\"",
                category,
                m.score,
                m.matched.len(),
                m.lexicon_size,
                escape_quotes(&matched.join(","))
            )
        })
        .collect()
}

/// Execute the score command
pub fn execute(ctx: &CommandContext, file: &Path, sequence: usize) -> Result<()> {
    if file.is_dir() {
        assay_core::bail_usage!(format!(
            "{} is a directory; use `assay assess` for a folder of submissions",
            file.display()
        ));
    }
    if !file.is_file() {
        return Err(AssayError::not_found("submission", file.display()));
    }

    let config = ctx.load_config(file.parent())?;
    let registry = config.lexicon_registry()?;

    let filename = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let submission = Submission::new(filename, extract_text(file));
    let assessment = assess_detailed(&submission, &registry, sequence);

    match ctx.cli.format {
        OutputFormat::Human => {
            for line in breakdown_lines(&assessment.analysis) {
                println!("{}", line);
            }
            println!();
            print!("{}", render_section(&assessment.record));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        OutputFormat::Records => {
            print!("{}", render_records(std::slice::from_ref(&assessment.record)));
            for line in breakdown_records(&assessment.analysis) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay_core::analysis::analyze;
    use assay_core::lexicon::LexiconRegistry;

    #[test]
    fn test_breakdown_lines_list_matches() {
        let analysis = analyze("pilot and a survey", &LexiconRegistry::builtin());
        let lines = breakdown_lines(&analysis);
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("Pilot Execution"));
        assert!(lines[1].contains("(1/13) pilot"));
        assert_eq!(lines[4], "Approaches: user study");
        assert_eq!(lines[5], "Words: 4");
    }

    #[test]
    fn test_breakdown_records() {
        let analysis = analyze("", &LexiconRegistry::builtin());
        let lines = breakdown_records(&analysis);
        assert_eq!(
            lines[0],
            "M research_design score=0.000 matched=0/11 tokens=\"\""
        );
    }
}
