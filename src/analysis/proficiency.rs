//! Heuristic proficiency detection from the text surrounding a skill mention

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Proficiency level inferred from context keywords and years of experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillLevel::Basic => write!(f, "basic"),
            SkillLevel::Intermediate => write!(f, "intermediate"),
            SkillLevel::Advanced => write!(f, "advanced"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proficiency {
    pub level: SkillLevel,
    pub years_of_experience: Option<u32>,
}

pub struct ProficiencyDetector {
    years_regex: Regex,
    context_patterns: HashMap<String, Regex>,
}

impl Default for ProficiencyDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProficiencyDetector {
    pub fn new() -> Self {
        Self::for_vocabulary(&[])
    }

    /// Create a detector with the context pattern for every vocabulary entry
    /// compiled up front
    pub fn for_vocabulary(vocabulary: &[String]) -> Self {
        let context_patterns = vocabulary
            .iter()
            .map(|skill| (skill.clone(), Self::context_pattern(skill)))
            .collect();

        Self {
            years_regex: Regex::new(r"(\d+)\s*\+?\s*(?:years?|yrs?)").expect("Invalid years regex"),
            context_patterns,
        }
    }

    /// Detect the proficiency level for `skill` from its mentions in `text`.
    ///
    /// A context window of up to 100 characters is captured after each
    /// occurrence of the skill, stopping at a sentence-ending period; all
    /// windows are concatenated before classification. The four level
    /// branches are evaluated in a fixed order: keyword signals for
    /// "advanced" dominate a years count that would otherwise classify as
    /// intermediate.
    pub fn detect(&self, text: &str, skill: &str) -> Proficiency {
        let context = self.context_for(text, skill);

        let years = self
            .years_regex
            .captures(&context)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok());

        let level = if ["expert", "advanced", "senior"]
            .iter()
            .any(|kw| context.contains(kw))
            || years.is_some_and(|y| y >= 5)
        {
            SkillLevel::Advanced
        } else if ["intermediate", "proficient", "experienced"]
            .iter()
            .any(|kw| context.contains(kw))
            || years.is_some_and(|y| y >= 2)
        {
            SkillLevel::Intermediate
        } else if ["basic", "beginner", "familiar", "learning"]
            .iter()
            .any(|kw| context.contains(kw))
        {
            SkillLevel::Basic
        } else {
            // Mentioned without any clear indicator
            SkillLevel::Intermediate
        };

        Proficiency {
            level,
            years_of_experience: years,
        }
    }

    /// Concatenated lowercase context windows following each skill occurrence.
    /// Vocabulary skills use their precompiled pattern; anything else compiles
    /// on the fly.
    fn context_for(&self, text: &str, skill: &str) -> String {
        let lowered = text.to_lowercase();
        let ad_hoc;
        let context_regex = match self.context_patterns.get(skill) {
            Some(regex) => regex,
            None => {
                ad_hoc = Self::context_pattern(skill);
                &ad_hoc
            }
        };

        context_regex
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn context_pattern(skill: &str) -> Regex {
        Regex::new(&format!("{}[^.]{{0,100}}", regex::escape(skill)))
            .expect("Invalid context regex")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_advanced() {
        let detector = ProficiencyDetector::new();
        let proficiency = detector.detect("Python, senior engineer on the platform team", "python");
        assert_eq!(proficiency.level, SkillLevel::Advanced);
        assert_eq!(proficiency.years_of_experience, None);
    }

    #[test]
    fn test_years_escalate_to_advanced() {
        let detector = ProficiencyDetector::new();
        let proficiency = detector.detect("Python developer with 6 years of experience", "python");
        assert_eq!(proficiency.level, SkillLevel::Advanced);
        assert_eq!(proficiency.years_of_experience, Some(6));
    }

    #[test]
    fn test_advanced_keyword_wins_over_intermediate_years() {
        let detector = ProficiencyDetector::new();
        let proficiency = detector.detect("Python expert, 2 years in production", "python");
        assert_eq!(proficiency.level, SkillLevel::Advanced);
        assert_eq!(proficiency.years_of_experience, Some(2));
    }

    #[test]
    fn test_years_escalate_to_intermediate() {
        let detector = ProficiencyDetector::new();
        let proficiency = detector.detect("Used docker for 3 years on side projects", "docker");
        assert_eq!(proficiency.level, SkillLevel::Intermediate);
        assert_eq!(proficiency.years_of_experience, Some(3));
    }

    #[test]
    fn test_basic_keywords() {
        let detector = ProficiencyDetector::new();
        let proficiency = detector.detect("kubernetes: familiar with deployments", "kubernetes");
        assert_eq!(proficiency.level, SkillLevel::Basic);
    }

    #[test]
    fn test_default_is_intermediate() {
        let detector = ProficiencyDetector::new();
        let proficiency = detector.detect("worked on react components", "react");
        assert_eq!(proficiency.level, SkillLevel::Intermediate);
        assert_eq!(proficiency.years_of_experience, None);
    }

    #[test]
    fn test_window_stops_at_period() {
        let detector = ProficiencyDetector::new();
        // The "8 years" figure sits past a sentence boundary, so it must not
        // be attributed to python
        let proficiency = detector.detect("Wrote python scripts. 8 years of Java", "python");
        assert_eq!(proficiency.years_of_experience, None);
        assert_eq!(proficiency.level, SkillLevel::Intermediate);
    }

    #[test]
    fn test_years_preceding_the_skill_are_not_captured() {
        let detector = ProficiencyDetector::new();
        // The window only looks forward from each occurrence
        let proficiency = detector.detect("5 years of experience writing Python", "python");
        assert_eq!(proficiency.years_of_experience, None);
    }

    #[test]
    fn test_regex_metacharacters_in_skill_name() {
        let detector = ProficiencyDetector::new();
        // "c++" must be escaped before being embedded in the context pattern
        let proficiency = detector.detect("c++ expert with template experience", "c++");
        assert_eq!(proficiency.level, SkillLevel::Advanced);
    }

    #[test]
    fn test_vocabulary_patterns_are_precompiled() {
        let vocabulary = vec!["python".to_string(), "c++".to_string()];
        let detector = ProficiencyDetector::for_vocabulary(&vocabulary);
        assert_eq!(detector.context_patterns.len(), 2);

        let proficiency = detector.detect("c++ expert with template experience", "c++");
        assert_eq!(proficiency.level, SkillLevel::Advanced);
    }

    #[test]
    fn test_plus_suffix_and_yr_abbreviation() {
        let detector = ProficiencyDetector::new();
        let proficiency = detector.detect("aws 4+ yrs hands-on", "aws");
        assert_eq!(proficiency.years_of_experience, Some(4));
        assert_eq!(proficiency.level, SkillLevel::Intermediate);
    }
}
