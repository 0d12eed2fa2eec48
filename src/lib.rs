//! Skill gap analyzer library

pub mod analysis;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use analysis::analyzer::{AnalysisResult, GapAnalyzer};
pub use config::Config;
pub use error::{Result, SkillGapError};
