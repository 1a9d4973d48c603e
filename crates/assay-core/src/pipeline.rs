//! Scoring pipeline: text → analysis → statements → critique → record
//!
//! Every stage is a pure function of its inputs. Submissions are independent;
//! the batch position only selects the closing line.

use std::time::Instant;

use serde::Serialize;

use crate::analysis::{analyze, AnalysisResult};
use crate::critique::select_critique;
use crate::feedback::{compose_improvements, compose_strengths};
use crate::lexicon::LexiconRegistry;
use crate::report::{assemble, FeedbackRecord};
use crate::submission::{submission_id, Submission};
use crate::trace_time;

/// Analysis and the record built from it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub analysis: AnalysisResult,
    pub record: FeedbackRecord,
}

/// Run the full pipeline for one submission, keeping the analysis
#[tracing::instrument(skip(submission, registry), fields(filename = %submission.filename))]
pub fn assess_detailed(
    submission: &Submission,
    registry: &LexiconRegistry,
    sequence_index: usize,
) -> Assessment {
    let name = submission.display_name();
    let analysis = analyze(&submission.raw_text, registry);
    let strengths = compose_strengths(&analysis);
    let improvements = compose_improvements(&analysis);
    let critique = select_critique(&analysis.scores());

    let record = assemble(
        &submission_id(&name),
        &name,
        &analysis,
        strengths,
        improvements,
        critique,
        sequence_index,
    );

    Assessment { analysis, record }
}

/// Run the full pipeline for one submission
pub fn assess(
    submission: &Submission,
    registry: &LexiconRegistry,
    sequence_index: usize,
) -> FeedbackRecord {
    assess_detailed(submission, registry, sequence_index).record
}

/// Assess a batch in order; each submission's index is its position
pub fn assess_batch(submissions: &[Submission], registry: &LexiconRegistry) -> Vec<FeedbackRecord> {
    let start = Instant::now();
    let records: Vec<FeedbackRecord> = submissions
        .iter()
        .enumerate()
        .map(|(index, submission)| assess(submission, registry, index))
        .collect();
    trace_time!(start, "assess_batch", submissions = records.len());
    records
}
