//! Gap analysis: the orchestrator comparing resume skills against job skills

use crate::analysis::database::{ResourcePriority, SkillDatabase};
use crate::analysis::extractor::{ExtractedSkill, SkillExtractor};
use crate::analysis::proficiency::SkillLevel;
use crate::analysis::suggestions::generate_suggestions;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// A job-required skill the candidate already has
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub name: String,
    pub proficiency: SkillLevel,
    pub years: Option<u32>,
    pub is_high_demand: bool,
}

/// A job-required skill absent from the resume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingSkill {
    pub name: String,
    pub resource: String,
    pub priority: ResourcePriority,
    pub is_high_demand: bool,
    /// Related skills the candidate already has, per the synonym table
    pub alternatives: Vec<String>,
}

/// A resume skill the job description does not ask for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraSkill {
    pub name: String,
    pub is_high_demand: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub matched_skills: Vec<MatchedSkill>,
    pub missing_skills: Vec<MissingSkill>,
    pub extra_skills: Vec<ExtraSkill>,
    /// Weighted percentage of job-required skills present, in [0, 100]
    pub match_score: f32,
    pub suggestions: Vec<String>,
}

pub struct GapAnalyzer {
    database: Arc<SkillDatabase>,
    extractor: SkillExtractor,
}

impl GapAnalyzer {
    pub fn new() -> Result<Self> {
        Self::with_additional_skills(Vec::new())
    }

    /// Create an analyzer whose vocabulary is extended with user-supplied
    /// skills (e.g. from configuration)
    pub fn with_additional_skills(additional_skills: Vec<String>) -> Result<Self> {
        let database = Arc::new(SkillDatabase::with_additional_skills(additional_skills));
        let extractor = SkillExtractor::new(Arc::clone(&database))?;

        Ok(Self {
            database,
            extractor,
        })
    }

    pub fn skill_count(&self) -> usize {
        self.database.skill_count()
    }

    /// Compare resume text against job description text.
    ///
    /// Pure transformation: no I/O, no shared mutable state, and it cannot
    /// fail. Empty inputs simply yield empty skill sets and a zero score;
    /// rejecting blank submissions is the caller's concern.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> AnalysisResult {
        let resume_skills = self.extractor.extract(resume_text);
        let job_skills = self.extractor.extract(job_text);

        // Walk the vocabulary in its fixed order so every output list is
        // deterministic. Each job skill lands in exactly one of
        // matched/missing; each resume skill in exactly one of matched/extra.
        let mut matched_skills = Vec::new();
        let mut missing_skills = Vec::new();
        let mut extra_skills = Vec::new();

        for skill in self.database.vocabulary() {
            let in_job = job_skills.contains_key(skill);
            match resume_skills.get(skill) {
                Some(details) if in_job => matched_skills.push(MatchedSkill {
                    name: details.name.clone(),
                    proficiency: details.proficiency.level,
                    years: details.proficiency.years_of_experience,
                    is_high_demand: details.is_high_demand,
                }),
                Some(details) => extra_skills.push(ExtraSkill {
                    name: details.name.clone(),
                    is_high_demand: details.is_high_demand,
                }),
                None if in_job => {
                    let resource = self.database.resource(skill);
                    missing_skills.push(MissingSkill {
                        name: skill.clone(),
                        resource: resource.url,
                        priority: resource.priority,
                        is_high_demand: self.database.is_high_demand(skill),
                        alternatives: self.find_alternatives(skill, &resume_skills),
                    });
                }
                None => {}
            }
        }

        // Stable two-key sort: market demand dominates the declared priority
        // tier
        missing_skills.sort_by(|a, b| {
            b.is_high_demand
                .cmp(&a.is_high_demand)
                .then(a.priority.cmp(&b.priority))
        });

        let match_score = self.weighted_match_score(&resume_skills, &job_skills);
        let suggestions = generate_suggestions(&matched_skills, &missing_skills, job_text);

        AnalysisResult {
            matched_skills,
            missing_skills,
            extra_skills,
            match_score,
            suggestions,
        }
    }

    /// Related skills the candidate already has for a missing job skill.
    ///
    /// Every synonym group containing the skill (as canonical key or
    /// alternate) contributes its other members that appear in the
    /// candidate's skill set.
    fn find_alternatives(
        &self,
        skill: &str,
        candidate_skills: &HashMap<String, ExtractedSkill>,
    ) -> Vec<String> {
        let mut alternatives = Vec::new();

        for (canonical, alternates) in self.database.synonyms() {
            if canonical == skill || alternates.iter().any(|s| s == skill) {
                for related in std::iter::once(canonical).chain(alternates.iter()) {
                    if related != skill && candidate_skills.contains_key(related) {
                        alternatives.push(related.clone());
                    }
                }
            }
        }

        alternatives
    }

    /// 100 * (matched job-skill weight) / (total job-skill weight), or 0 when
    /// the job yields no skills
    fn weighted_match_score(
        &self,
        resume_skills: &HashMap<String, ExtractedSkill>,
        job_skills: &HashMap<String, ExtractedSkill>,
    ) -> f32 {
        if job_skills.is_empty() {
            return 0.0;
        }

        let mut total_weight = 0.0;
        let mut matched_weight = 0.0;

        // Summed in vocabulary order so the float result is reproducible
        for skill in self.database.vocabulary() {
            if let Some(details) = job_skills.get(skill) {
                total_weight += details.weight;
                if resume_skills.contains_key(skill) {
                    matched_weight += details.weight;
                }
            }
        }

        (matched_weight / total_weight) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> GapAnalyzer {
        GapAnalyzer::new().unwrap()
    }

    #[test]
    fn test_empty_inputs_degrade_gracefully() {
        let result = analyzer().analyze("", "");

        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert!(result.extra_skills.is_empty());
        assert_eq!(result.match_score, 0.0);
        // Generic tips only
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn test_empty_job_scores_zero() {
        let result = analyzer().analyze("Python and Docker veteran", "");
        assert_eq!(result.match_score, 0.0);
        assert!(result.missing_skills.is_empty());
        assert!(!result.extra_skills.is_empty());
    }

    #[test]
    fn test_full_coverage_scores_hundred() {
        let analyzer = analyzer();
        let text = "Python, Docker and Kubernetes";
        let result = analyzer.analyze(text, text);

        assert!((result.match_score - 100.0).abs() < f32::EPSILON);
        assert!(result.missing_skills.is_empty());
        assert!(result.extra_skills.is_empty());
    }

    #[test]
    fn test_missing_skill_carries_resource_and_fallback() {
        let result = analyzer().analyze("", "Needs docker and matlab");

        let docker = result
            .missing_skills
            .iter()
            .find(|s| s.name == "docker")
            .unwrap();
        assert_eq!(docker.resource, "https://docs.docker.com/get-started/");
        assert_eq!(docker.priority, ResourcePriority::High);
        assert!(docker.is_high_demand);

        let matlab = result
            .missing_skills
            .iter()
            .find(|s| s.name == "matlab")
            .unwrap();
        assert!(matlab.resource.starts_with("https://www.google.com/search?q=learn+"));
        assert_eq!(matlab.priority, ResourcePriority::Low);
        assert!(!matlab.is_high_demand);
    }

    #[test]
    fn test_missing_sort_demand_then_priority() {
        // Job skills with no resume: docker (high demand, high priority),
        // sql (high demand, medium priority), r (substring hit inside
        // "docker", neither flag). Demand dominates, then the tier.
        let result = analyzer().analyze("", "We need Docker and SQL expertise");

        let names: Vec<&str> = result
            .missing_skills
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["docker", "sql", "r"]);
    }

    #[test]
    fn test_alternatives_from_synonym_table() {
        // The resume's node.js surface form never matches the job's "nodejs"
        // entry directly; it surfaces as a related alternative instead
        let result = analyzer().analyze(
            "Backend services on node.js",
            "We want nodejs developers",
        );

        let nodejs = result
            .missing_skills
            .iter()
            .find(|s| s.name == "nodejs")
            .unwrap();
        assert_eq!(nodejs.alternatives, vec!["node.js".to_string()]);
    }

    #[test]
    fn test_sklearn_alternative_for_scikit_learn() {
        let result = analyzer().analyze(
            "Model pipelines built with sklearn",
            "Must know scikit-learn",
        );

        let scikit = result
            .missing_skills
            .iter()
            .find(|s| s.name == "scikit-learn")
            .unwrap();
        assert!(scikit.alternatives.contains(&"sklearn".to_string()));
    }

    #[test]
    fn test_idempotence() {
        let analyzer = analyzer();
        let resume = "Senior Python developer, 6 years. Docker and AWS daily.";
        let job = "Python, AWS, Kubernetes. 5+ years required.";

        let first = analyzer.analyze(resume, job);
        let second = analyzer.analyze(resume, job);

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
