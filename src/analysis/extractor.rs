//! Skill extraction against the static vocabulary

use crate::analysis::database::SkillDatabase;
use crate::analysis::proficiency::{Proficiency, ProficiencyDetector};
use crate::analysis::text_processor::TextProcessor;
use crate::error::{Result, SkillGapError};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// A skill detected in one input text, with its surrounding-context metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub proficiency: Proficiency,
    pub weight: f32,
    pub is_high_demand: bool,
}

pub struct SkillExtractor {
    database: Arc<SkillDatabase>,
    substring_matcher: AhoCorasick,
    processor: TextProcessor,
    detector: ProficiencyDetector,
}

impl SkillExtractor {
    pub fn new(database: Arc<SkillDatabase>) -> Result<Self> {
        let substring_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(database.vocabulary())
            .map_err(|e| {
                SkillGapError::Processing(format!("Failed to build skill matcher: {}", e))
            })?;

        let detector = ProficiencyDetector::for_vocabulary(database.vocabulary());

        Ok(Self {
            database,
            substring_matcher,
            processor: TextProcessor::new(),
            detector,
        })
    }

    /// Extract every vocabulary skill present in `text`, keyed by skill name.
    ///
    /// Multi-word skills match by substring containment in the lowercased raw
    /// text; single-word skills match by token membership or substring
    /// containment. The substring check deliberately tolerates partial and
    /// inflected matches, so very short entries ("r", "go", "ai") can match
    /// inside unrelated words. That imprecision is a known heuristic
    /// limitation kept on purpose; tightening it would change scoring.
    pub fn extract(&self, text: &str) -> HashMap<String, ExtractedSkill> {
        let tokens = self.processor.token_set(text);

        let mut substring_hits: HashSet<usize> = HashSet::new();
        for mat in self.substring_matcher.find_overlapping_iter(text) {
            substring_hits.insert(mat.pattern().as_usize());
        }

        let mut found = HashMap::new();
        for (pattern_id, skill) in self.database.vocabulary().iter().enumerate() {
            let is_found = if skill.contains(' ') {
                substring_hits.contains(&pattern_id)
            } else {
                tokens.contains(skill.as_str()) || substring_hits.contains(&pattern_id)
            };

            if is_found {
                found.insert(
                    skill.clone(),
                    ExtractedSkill {
                        name: skill.clone(),
                        proficiency: self.detector.detect(text, skill),
                        weight: self.database.weight(skill),
                        is_high_demand: self.database.is_high_demand(skill),
                    },
                );
            }
        }

        found
    }
}
