pub mod assess;
pub mod config;
pub mod lexicon;
pub mod misc;
pub mod score;
pub mod support;
