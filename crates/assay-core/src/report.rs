//! Report assembly: one ordered feedback record per submission

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::analysis::AnalysisResult;

/// Shown when no strength rule fired
pub const STRENGTH_FALLBACK: &str = "Evidence of progress toward a coherent method";

/// Shown when no improvement rule fired
pub const IMPROVEMENT_FALLBACK: &str = "Clarify the most critical elements of the method";

const OPENING_TEMPLATES: [&str; 5] = [
    "{name}, your submission shows thoughtful engagement with designing a workable method.",
    "{name}, you demonstrate genuine effort translating your claim into a testable plan.",
    "{name}, there\u{2019}s clear care in how you structure your approach and learning.",
    "{name}, your work reflects steady progress toward a robust, defensible method.",
    "{name}, this reads as a committed attempt to build reliable evidence.",
];

const CLOSING_TEMPLATES: [&str; 10] = [
    "You\u{2019}re close\u{2014}tighten the essentials and A4 will benefit.",
    "Small, focused revisions now will amplify your A4 results.",
    "Carry these refinements forward and your evidence will land.",
    "Clarity plus follow-through will make your analysis credible.",
    "Lean into the method\u{2014}reliability beats breadth every time.",
    "Finish the basics strong and A4 becomes straightforward.",
    "Keep the structure firm and the story will carry itself.",
    "Sharpen criteria and the next decisions become obvious.",
    "Anchor with protocol\u{2014}consistency will do the heavy lifting.",
    "Tighten the chain of reasoning and you\u{2019}ll be persuasive.",
];

/// Final feedback for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRecord {
    pub submission_id: String,
    pub sequence_index: usize,
    pub name: String,
    pub opening: String,
    pub critique: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub closing: String,
    pub grade: u32,
}

/// Stable 64-bit hash of a display name: the first eight bytes of its
/// SHA-256 digest, big-endian.
pub fn name_hash(name: &str) -> u64 {
    let digest = Sha256::digest(name.as_bytes());
    digest
        .iter()
        .take(8)
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))
}

/// Opening line, keyed by the display name
pub fn opening_line(name: &str) -> String {
    let index = (name_hash(name) % OPENING_TEMPLATES.len() as u64) as usize;
    OPENING_TEMPLATES[index].replace("{name}", name)
}

/// Closing line, keyed by batch position only
pub fn closing_line(sequence_index: usize) -> &'static str {
    CLOSING_TEMPLATES[sequence_index % CLOSING_TEMPLATES.len()]
}

fn or_fallback(lines: Vec<String>, fallback: &str) -> Vec<String> {
    if lines.is_empty() {
        vec![fallback.to_string()]
    } else {
        lines
    }
}

/// Combine the pipeline outputs into a record
pub fn assemble(
    submission_id: &str,
    name: &str,
    analysis: &AnalysisResult,
    strengths: Vec<String>,
    improvements: Vec<String>,
    critique: &str,
    sequence_index: usize,
) -> FeedbackRecord {
    FeedbackRecord {
        submission_id: submission_id.to_string(),
        sequence_index,
        name: name.to_string(),
        opening: opening_line(name),
        critique: critique.to_string(),
        strengths: or_fallback(strengths, STRENGTH_FALLBACK),
        improvements: or_fallback(improvements, IMPROVEMENT_FALLBACK),
        closing: closing_line(sequence_index).to_string(),
        grade: analysis.estimated_grade,
    }
}
