//! Skill gap analysis core
//! Vocabulary lookup, proficiency detection, gap comparison, and suggestions

pub mod analyzer;
pub mod database;
pub mod extractor;
pub mod proficiency;
pub mod suggestions;
pub mod text_processor;
