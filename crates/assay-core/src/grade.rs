//! Grade estimation from category scores and submission length
//!
//! `grade = round((40·rd + 30·pilot + 20·doc + 10·comm) × length_factor)`,
//! rounded half to even and clamped to `[0, 100]`.

use crate::lexicon::Category;

/// Upper bound of the estimated grade
pub const MAX_GRADE: u32 = 100;

/// Category scores in rubric order
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryScores {
    pub research_design: f64,
    pub pilot_execution: f64,
    pub documentation: f64,
    pub communication: f64,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::ResearchDesign => self.research_design,
            Category::PilotExecution => self.pilot_execution,
            Category::Documentation => self.documentation,
            Category::Communication => self.communication,
        }
    }

    /// Weighted rubric sum, nominally in `[0, 100]`
    pub fn weighted_sum(&self) -> f64 {
        Category::ALL
            .iter()
            .map(|c| c.weight() * self.get(*c))
            .sum()
    }
}

/// Multiplier penalising short submissions
pub fn length_factor(word_count: usize) -> f64 {
    match word_count {
        0..=499 => 0.8,
        500..=799 => 0.9,
        _ => 1.0,
    }
}

/// Round half to even, then clamp into the grade range.
///
/// NaN maps to 0.
pub fn round_grade(value: f64) -> u32 {
    let rounded = value.round_ties_even();
    if rounded.is_nan() {
        return 0;
    }
    rounded.clamp(0.0, MAX_GRADE as f64) as u32
}

/// Estimate a 0–100 grade
pub fn estimate_grade(scores: &CategoryScores, word_count: usize) -> u32 {
    round_grade(scores.weighted_sum() * length_factor(word_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(rd: f64, pilot: f64, doc: f64, comm: f64) -> CategoryScores {
        CategoryScores {
            research_design: rd,
            pilot_execution: pilot,
            documentation: doc,
            communication: comm,
        }
    }

    #[test]
    fn test_length_factor_boundaries() {
        assert_eq!(length_factor(0), 0.8);
        assert_eq!(length_factor(499), 0.8);
        assert_eq!(length_factor(500), 0.9);
        assert_eq!(length_factor(799), 0.9);
        assert_eq!(length_factor(800), 1.0);
        assert_eq!(length_factor(10_000), 1.0);
    }

    #[test]
    fn test_round_grade_ties_to_even() {
        assert_eq!(round_grade(50.5), 50);
        assert_eq!(round_grade(51.5), 52);
        assert_eq!(round_grade(0.5), 0);
        assert_eq!(round_grade(50.51), 51);
    }

    #[test]
    fn test_round_grade_clamps() {
        assert_eq!(round_grade(-12.0), 0);
        assert_eq!(round_grade(140.0), 100);
        assert_eq!(round_grade(f64::NAN), 0);
        assert_eq!(round_grade(f64::INFINITY), 100);
    }

    #[test]
    fn test_estimate_grade_tie_points() {
        // 10 × 0.25 = 2.5 → 2, 10 × 0.75 = 7.5 → 8
        assert_eq!(estimate_grade(&scores(0.0, 0.0, 0.0, 0.25), 1000), 2);
        assert_eq!(estimate_grade(&scores(0.0, 0.0, 0.0, 0.75), 1000), 8);
    }

    #[test]
    fn test_estimate_grade_full_marks() {
        assert_eq!(estimate_grade(&scores(1.0, 1.0, 1.0, 1.0), 800), 100);
        assert_eq!(estimate_grade(&scores(1.0, 1.0, 1.0, 1.0), 600), 90);
        assert_eq!(estimate_grade(&scores(1.0, 1.0, 1.0, 1.0), 100), 80);
    }

    #[test]
    fn test_estimate_grade_zero() {
        assert_eq!(estimate_grade(&CategoryScores::default(), 0), 0);
    }

    #[test]
    fn test_estimate_grade_adversarial_scores_clamped() {
        assert_eq!(estimate_grade(&scores(3.0, 3.0, 3.0, 3.0), 1000), 100);
        assert_eq!(estimate_grade(&scores(-1.0, 0.0, 0.0, 0.0), 1000), 0);
    }

    #[test]
    fn test_weights_applied_per_category() {
        assert_eq!(estimate_grade(&scores(1.0, 0.0, 0.0, 0.0), 1000), 40);
        assert_eq!(estimate_grade(&scores(0.0, 1.0, 0.0, 0.0), 1000), 30);
        assert_eq!(estimate_grade(&scores(0.0, 0.0, 1.0, 0.0), 1000), 20);
        assert_eq!(estimate_grade(&scores(0.0, 0.0, 0.0, 1.0), 1000), 10);
    }
}
