//! CLI commands for assay

pub mod assess;
pub mod dispatch;
pub mod lexicon;
pub mod score;
