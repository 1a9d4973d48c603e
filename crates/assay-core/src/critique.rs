//! Core critique: one fixed sentence for the weakest rubric category

use crate::grade::CategoryScores;
use crate::lexicon::Category;

/// The weakest category; exact ties go to the higher-priority category
pub fn weakest_category(scores: &CategoryScores) -> Category {
    let mut weakest = Category::ResearchDesign;
    for category in Category::ALL {
        if scores.get(category) < scores.get(weakest) {
            weakest = category;
        }
    }
    weakest
}

/// Critique sentence for a category
pub fn critique_for(category: Category) -> &'static str {
    match category {
        Category::ResearchDesign => {
            "Clarify success criteria and testable hypotheses to anchor your method."
        }
        Category::PilotExecution => {
            "Make pilot learning explicit and convert it into concrete refinements."
        }
        Category::Documentation => {
            "Add a reproducible, step-by-step protocol with data and ethics plans."
        }
        Category::Communication => {
            "Improve structure and signposting so reasoning is easy to follow."
        }
    }
}

pub fn select_critique(scores: &CategoryScores) -> &'static str {
    critique_for(weakest_category(scores))
}
