//! Assay Core Library
//!
//! Scoring and feedback pipeline for the Assay rubric assessor, plus the
//! collaborators around it: configuration, text extraction, submission
//! discovery, and report rendering.

pub mod analysis;
pub mod config;
pub mod critique;
pub mod discover;
pub mod error;
pub mod extract;
pub mod feedback;
pub mod format;
pub mod grade;
pub mod lexicon;
pub mod logging;
pub mod matcher;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod submission;
pub mod text;
