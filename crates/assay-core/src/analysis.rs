//! Per-submission analysis: category coverage, approaches, length, grade

use serde::Serialize;

use crate::grade::{estimate_grade, CategoryScores};
use crate::lexicon::{Category, LexiconRegistry};
use crate::matcher::{detect_approaches, match_category, CategoryMatch};
use crate::text::{detect_structure, word_count, NormalizedText};

/// Everything the feedback stages need to know about one submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub research_design: CategoryMatch,
    pub pilot_execution: CategoryMatch,
    pub documentation: CategoryMatch,
    pub communication: CategoryMatch,
    pub approaches: Vec<String>,
    pub word_count: usize,
    pub estimated_grade: u32,
}

impl AnalysisResult {
    pub fn category(&self, category: Category) -> &CategoryMatch {
        match category {
            Category::ResearchDesign => &self.research_design,
            Category::PilotExecution => &self.pilot_execution,
            Category::Documentation => &self.documentation,
            Category::Communication => &self.communication,
        }
    }

    pub fn scores(&self) -> CategoryScores {
        CategoryScores {
            research_design: self.research_design.score,
            pilot_execution: self.pilot_execution.score,
            documentation: self.documentation.score,
            communication: self.communication.score,
        }
    }
}

/// Analyze raw submission text. Empty text yields an all-zero result.
#[tracing::instrument(skip(raw, registry), fields(bytes = raw.len()))]
pub fn analyze(raw: &str, registry: &LexiconRegistry) -> AnalysisResult {
    let text = NormalizedText::new(raw);
    let matched = |category| match_category(&text, category, registry.category(category));

    let mut communication = matched(Category::Communication);
    if detect_structure(raw) {
        communication = communication.with_heading_signal();
    }

    let research_design = matched(Category::ResearchDesign);
    let pilot_execution = matched(Category::PilotExecution);
    let documentation = matched(Category::Documentation);
    let approaches = detect_approaches(&text, registry);
    let word_count = word_count(raw);

    let scores = CategoryScores {
        research_design: research_design.score,
        pilot_execution: pilot_execution.score,
        documentation: documentation.score,
        communication: communication.score,
    };
    let estimated_grade = estimate_grade(&scores, word_count);

    tracing::debug!(
        research_design = scores.research_design,
        pilot_execution = scores.pilot_execution,
        documentation = scores.documentation,
        communication = scores.communication,
        word_count,
        estimated_grade,
        "analyzed"
    );

    AnalysisResult {
        research_design,
        pilot_execution,
        documentation,
        communication,
        approaches,
        word_count,
        estimated_grade,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_empty_text() {
        let result = analyze("", &LexiconRegistry::builtin());
        for category in Category::ALL {
            assert_eq!(result.category(category).score, 0.0);
            assert!(result.category(category).matched.is_empty());
        }
        assert!(result.approaches.is_empty());
        assert_eq!(result.word_count, 0);
        assert_eq!(result.estimated_grade, 0);
    }

    #[test]
    fn test_heading_signal_only_with_three_headings() {
        let registry = LexiconRegistry::builtin();
        let two = analyze("# A\n# B\n", &registry);
        assert!(!two.communication.has("heading"));

        let three = analyze("# A\n# B\n# C\n", &registry);
        assert!(three.communication.has("heading"));
        assert_eq!(three.communication.score, 1.0 / 8.0);
    }

    #[test]
    fn test_scores_match_categories() {
        let result = analyze("pilot protocol", &LexiconRegistry::builtin());
        let scores = result.scores();
        assert_eq!(scores.pilot_execution, 1.0 / 13.0);
        assert_eq!(scores.documentation, 1.0 / 11.0);
        assert_eq!(scores.research_design, 0.0);
    }
}
