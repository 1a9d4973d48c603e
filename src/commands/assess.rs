//! `assay assess` command - assess a directory of submissions
//!
//! Discovers submissions, extracts their text, runs the scoring pipeline in
//! file-name order and writes the rendered report.

use std::fs;
use std::path::{Path, PathBuf};

use assay_core::config::ReportConfig;
use assay_core::discover::discover_submissions;
use assay_core::error::{AssayError, Result};
use assay_core::extract::extract_text;
use assay_core::format::OutputFormat;
use assay_core::pipeline::assess_batch;
use assay_core::render::render;
use assay_core::submission::Submission;
use assay_core::trace_time;

use crate::commands::dispatch::CommandContext;

/// Report path inside the submissions directory, by output format
fn default_output_path(dir: &Path, report: &ReportConfig, format: OutputFormat) -> PathBuf {
    let path = dir.join(&report.output_file);
    match format {
        OutputFormat::Human => path,
        OutputFormat::Json => path.with_extension("json"),
        OutputFormat::Records => path.with_extension("records"),
    }
}

fn load_submission(path: &Path) -> Submission {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Submission::new(filename, extract_text(path))
}

/// Execute the assess command
pub fn execute(
    ctx: &CommandContext,
    dir: &Path,
    output: Option<&Path>,
    to_stdout: bool,
) -> Result<()> {
    let cli = ctx.cli;
    let config = ctx.load_config(Some(dir))?;
    let registry = config.lexicon_registry()?;

    let files = discover_submissions(dir)?;
    if files.is_empty() {
        return Err(AssayError::NoSubmissions {
            dir: dir.to_path_buf(),
        });
    }

    let submissions: Vec<Submission> = files.iter().map(|path| load_submission(path)).collect();
    trace_time!(ctx.start, "extract", submissions = submissions.len());

    let records = assess_batch(&submissions, &registry);
    let rendered = render(&records, cli.format, &config.report)?;

    if to_stdout {
        print!("{}", rendered);
        return Ok(());
    }

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(dir, &config.report, cli.format));
    fs::write(&path, rendered)
        .map_err(|e| AssayError::io_operation("write report", path.display(), e))?;

    tracing::info!(path = %path.display(), submissions = records.len(), "wrote report");
    if !cli.quiet {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
