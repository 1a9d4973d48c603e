//! Feedback composition: ranked strength and improvement statements
//!
//! Both lists come from ordered rule tables. A strength rule, when it fires,
//! is ranked by the live coverage score of its category; an improvement rule
//! carries a fixed severity reflecting rubric importance. Candidates are
//! stable-sorted by descending priority (ties keep table order) and the top
//! [`MAX_STATEMENTS`] are kept.

use crate::analysis::AnalysisResult;
use crate::lexicon::Category;

/// Maximum statements per list
pub const MAX_STATEMENTS: usize = 3;

/// Communication coverage above which sectioning counts as a strength
pub const COMMUNICATION_STRENGTH_THRESHOLD: f64 = 0.3;

/// Communication coverage below which sectioning is flagged for improvement
pub const COMMUNICATION_GAP_THRESHOLD: f64 = 0.3;

struct StatementCandidate {
    priority: f64,
    text: String,
}

enum StrengthText {
    Fixed(&'static str),
    /// Lists the detected approaches
    MethodSelection,
}

struct StrengthRule {
    category: Category,
    applies: fn(&AnalysisResult) -> bool,
    text: StrengthText,
}

struct ImprovementRule {
    severity: f64,
    applies: fn(&AnalysisResult) -> bool,
    text: &'static str,
}

const STRENGTH_RULES: &[StrengthRule] = &[
    StrengthRule {
        category: Category::ResearchDesign,
        applies: |a| a.research_design.has_any(&["hypothesis", "hypotheses"]),
        text: StrengthText::Fixed("Clear articulation of testable hypotheses"),
    },
    StrengthRule {
        category: Category::ResearchDesign,
        applies: |a| {
            a.research_design
                .has_any(&["success criteria", "decision threshold"])
        },
        text: StrengthText::Fixed("Defined success criteria and decision thresholds"),
    },
    StrengthRule {
        category: Category::ResearchDesign,
        applies: |a| {
            a.research_design
                .has_any(&["quality control", "reliability", "validity"])
        },
        text: StrengthText::Fixed("Attention to validity/reliability and quality controls"),
    },
    StrengthRule {
        category: Category::ResearchDesign,
        applies: |a| !a.approaches.is_empty(),
        text: StrengthText::MethodSelection,
    },
    StrengthRule {
        category: Category::PilotExecution,
        applies: |a| {
            a.pilot_execution.has("pilot")
                && a
                    .pilot_execution
                    .has_any(&["refine", "refinement", "revised"])
        },
        text: StrengthText::Fixed("Pilot learning translated into concrete refinements"),
    },
    StrengthRule {
        category: Category::PilotExecution,
        applies: |a| a.pilot_execution.has("unexpected"),
        text: StrengthText::Fixed("Reflective discussion of unexpected findings"),
    },
    StrengthRule {
        category: Category::Documentation,
        applies: |a| a.documentation.has_any(&["protocol", "step-by-step"]),
        text: StrengthText::Fixed("Step-by-step protocol improves reproducibility"),
    },
    StrengthRule {
        category: Category::Documentation,
        applies: |a| a.documentation.has_any(&["ethical", "consent", "privacy"]),
        text: StrengthText::Fixed("Ethical/privacy considerations are acknowledged"),
    },
    StrengthRule {
        category: Category::Documentation,
        applies: |a| a.documentation.has_any(&["data management", "metadata"]),
        text: StrengthText::Fixed("Data management and metadata are planned"),
    },
    StrengthRule {
        category: Category::Communication,
        applies: |a| a.communication.score > COMMUNICATION_STRENGTH_THRESHOLD,
        text: StrengthText::Fixed("Professional organization with clear sectioning"),
    },
];

// Severity order: research design > pilot > documentation > communication
const IMPROVEMENT_RULES: &[ImprovementRule] = &[
    ImprovementRule {
        severity: 1.0,
        applies: |a| {
            !a.research_design
                .has_any(&["success criteria", "decision threshold"])
        },
        text: "Define clear success criteria and decision thresholds",
    },
    ImprovementRule {
        severity: 0.95,
        applies: |a| !a.research_design.has_any(&["hypothesis", "hypotheses"]),
        text: "State explicit, testable hypotheses aligned to the question",
    },
    ImprovementRule {
        severity: 0.9,
        applies: |a| {
            !a.research_design
                .has_any(&["quality control", "reliability", "validity"])
        },
        text: "Add quality control procedures to support validity/reliability",
    },
    ImprovementRule {
        severity: 0.85,
        applies: |a| !a.pilot_execution.has("pilot"),
        text: "Document a focused pilot and what it verified",
    },
    ImprovementRule {
        severity: 0.82,
        applies: |a| {
            !a.pilot_execution
                .has_any(&["refine", "refinement", "revised"])
        },
        text: "Translate pilot learning into specific refinements",
    },
    ImprovementRule {
        severity: 0.8,
        applies: |a| !a.pilot_execution.has("unexpected"),
        text: "Reflect on unexpected findings and implications",
    },
    ImprovementRule {
        severity: 0.6,
        applies: |a| !a.documentation.has_any(&["protocol", "step-by-step"]),
        text: "Provide a step-by-step protocol for reproducibility",
    },
    ImprovementRule {
        severity: 0.58,
        applies: |a| {
            !a.documentation
                .has_any(&["ethical", "privacy", "consent", "irb"])
        },
        text: "Address ethical/privacy and consent considerations",
    },
    ImprovementRule {
        severity: 0.56,
        applies: |a| !a.documentation.has_any(&["data management", "metadata"]),
        text: "State a concrete data management and metadata plan",
    },
    ImprovementRule {
        severity: 0.3,
        applies: |a| a.communication.score < COMMUNICATION_GAP_THRESHOLD,
        text: "Improve document structure with clear sections and signposting",
    },
];

impl StrengthRule {
    fn evaluate(&self, analysis: &AnalysisResult) -> Option<StatementCandidate> {
        if !(self.applies)(analysis) {
            return None;
        }
        let text = match self.text {
            StrengthText::Fixed(text) => text.to_string(),
            StrengthText::MethodSelection => format!(
                "Appropriate method selection ({})",
                analysis.approaches.join(", ")
            ),
        };
        Some(StatementCandidate {
            priority: analysis.category(self.category).score,
            text,
        })
    }
}

impl ImprovementRule {
    fn evaluate(&self, analysis: &AnalysisResult) -> Option<StatementCandidate> {
        (self.applies)(analysis).then(|| StatementCandidate {
            priority: self.severity,
            text: self.text.to_string(),
        })
    }
}

/// Stable sort by descending priority and keep the top entries
fn rank(mut candidates: Vec<StatementCandidate>) -> Vec<String> {
    candidates.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    candidates
        .into_iter()
        .take(MAX_STATEMENTS)
        .map(|c| c.text)
        .collect()
}

/// Up to three strengths, strongest category first
pub fn compose_strengths(analysis: &AnalysisResult) -> Vec<String> {
    rank(
        STRENGTH_RULES
            .iter()
            .filter_map(|rule| rule.evaluate(analysis))
            .collect(),
    )
}

/// Up to three improvements, most severe gap first
pub fn compose_improvements(analysis: &AnalysisResult) -> Vec<String> {
    rank(
        IMPROVEMENT_RULES
            .iter()
            .filter_map(|rule| rule.evaluate(analysis))
            .collect(),
    )
}
