//! Rendering feedback records
//!
//! The record list is already ordered and complete; rendering only lays it
//! out. The human format is a Quarto-compatible markdown document.

use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::format::{escape_quotes, OutputFormat};
use crate::lexicon::Category;
use crate::report::FeedbackRecord;

/// Records format version, emitted in the header line
pub const RECORDS_VERSION: u32 = 1;

#[derive(Serialize)]
struct FrontMatter<'a> {
    title: &'a str,
    subtitle: &'a str,
    format: DocumentFormat,
}

#[derive(Serialize)]
struct DocumentFormat {
    html: HtmlOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct HtmlOptions {
    toc: bool,
    toc_depth: u8,
    number_sections: bool,
}

/// Render records in the requested format
pub fn render(
    records: &[FeedbackRecord],
    format: OutputFormat,
    report: &ReportConfig,
) -> Result<String> {
    match format {
        OutputFormat::Human => render_document(records, report),
        OutputFormat::Json => render_json(records),
        OutputFormat::Records => Ok(render_records(records)),
    }
}

pub fn render_json(records: &[FeedbackRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

fn front_matter(report: &ReportConfig) -> Result<String> {
    let matter = FrontMatter {
        title: &report.title,
        subtitle: &report.subtitle,
        format: DocumentFormat {
            html: HtmlOptions {
                toc: true,
                toc_depth: 2,
                number_sections: true,
            },
        },
    };
    let yaml = serde_yaml::to_string(&matter)?;
    let body = yaml.strip_prefix("---\n").unwrap_or(&yaml);
    Ok(format!("---\n{}---\n", body))
}

fn rubric_summary() -> String {
    Category::ALL
        .iter()
        .map(|c| format!("{} {}%", c.short_label(), c.weight()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn anchor(record: &FeedbackRecord) -> String {
    if record.submission_id.is_empty() {
        format!("submission-{}", record.sequence_index + 1)
    } else {
        record.submission_id.clone()
    }
}

/// Markdown section for one record
pub fn render_section(record: &FeedbackRecord) -> String {
    let mut lines = vec![format!(
        "## {}. {} {{#{}}}",
        record.sequence_index + 1,
        record.name,
        anchor(record)
    )];
    lines.push("\n### Opening Recognition".to_string());
    lines.push(record.opening.clone());
    lines.push("\n### Core Critique".to_string());
    lines.push(record.critique.clone());
    lines.push("\n### Strengths (Top 3)".to_string());
    lines.extend(record.strengths.iter().map(|s| format!("- {}", s)));
    lines.push("\n### Areas to Improve (Top 3)".to_string());
    lines.extend(record.improvements.iter().map(|s| format!("- {}", s)));
    lines.push("\n### Closing".to_string());
    lines.push(record.closing.clone());
    lines.push(format!("\n**Estimated Grade: {}/100**", record.grade));
    lines.push("\n---\n".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Full feedback document: front matter, notes, one section per record
pub fn render_document(records: &[FeedbackRecord], report: &ReportConfig) -> Result<String> {
    let mut out = front_matter(report)?;
    out.push_str("\n# Assessment Notes\n\n");
    out.push_str(&format!(
        "This document provides a structured first-pass assessment generated from each \
         submission\u{2019}s text, aligned to the {} ({}). It should be reviewed by the \
         instructor for final grading.\n\n---\n\n# Individual Feedback\n",
        report.rubric,
        rubric_summary()
    ));

    for record in records {
        out.push_str(&render_section(record));
    }
    Ok(out)
}

/// Line-oriented output: a header, then R/O/C/S/I/X lines per record
pub fn render_records(records: &[FeedbackRecord]) -> String {
    let mut lines = vec![format!(
        "H assay={} records={}",
        RECORDS_VERSION,
        records.len()
    )];
    for record in records {
        lines.push(format!(
            "R {} id={} grade={} name=\"{}\"",
            record.sequence_index + 1,
            record.submission_id,
            record.grade,
            escape_quotes(&record.name)
        ));
        lines.push(format!("O \"{}\"", escape_quotes(&record.opening)));
        lines.push(format!("C \"{}\"", escape_quotes(&record.critique)));
        lines.extend(
            record
                .strengths
                .iter()
                .map(|s| format!("S \"{}\"", escape_quotes(s))),
        );
        lines.extend(
            record
                .improvements
                .iter()
                .map(|s| format!("I \"{}\"", escape_quotes(s))),
        );
        lines.push(format!("X \"{}\"", escape_quotes(&record.closing)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
