//! Static skill lookup tables: vocabulary, synonyms, weights, learning
//! resources, and the high-demand set.
//!
//! All tables are built once when the database is constructed and never
//! written to afterwards; every analysis call only reads them.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Priority tier for learning a missing skill.
///
/// Variant order matters: the derived `Ord` puts `High < Medium < Low`, which
/// is the ascending sort order used for missing-skill ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourcePriority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for ResourcePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourcePriority::High => write!(f, "high"),
            ResourcePriority::Medium => write!(f, "medium"),
            ResourcePriority::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    pub url: String,
    pub priority: ResourcePriority,
}

pub struct SkillDatabase {
    vocabulary: Vec<String>,
    synonyms: Vec<(String, Vec<String>)>,
    weights: HashMap<String, f32>,
    resources: HashMap<String, LearningResource>,
    high_demand: HashSet<String>,
}

impl SkillDatabase {
    /// Create a database with the default curated tables
    pub fn new() -> Self {
        Self::with_additional_skills(Vec::new())
    }

    /// Create a database with extra vocabulary entries appended (e.g. from
    /// user configuration). Entries are lowercased and trimmed; duplicates of
    /// existing vocabulary are dropped.
    pub fn with_additional_skills(additional_skills: Vec<String>) -> Self {
        let mut vocabulary = Self::default_vocabulary();

        for skill in additional_skills {
            let normalized = skill.trim().to_lowercase();
            if !normalized.is_empty() && !vocabulary.iter().any(|s| *s == normalized) {
                vocabulary.push(normalized);
            }
        }

        Self {
            vocabulary,
            synonyms: Self::default_synonyms(),
            weights: Self::default_weights(),
            resources: Self::default_resources(),
            high_demand: Self::default_high_demand(),
        }
    }

    /// All known skill names, in their fixed vocabulary order
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Synonym groups as (canonical name, alternate surface forms) pairs, in
    /// a fixed order
    pub fn synonyms(&self) -> &[(String, Vec<String>)] {
        &self.synonyms
    }

    /// Importance multiplier for a skill; unknown skills weigh 1.0
    pub fn weight(&self, skill: &str) -> f32 {
        self.weights.get(skill).copied().unwrap_or(1.0)
    }

    pub fn is_high_demand(&self, skill: &str) -> bool {
        self.high_demand.contains(skill)
    }

    /// Learning resource for a skill, falling back to a generated search URL
    /// with low priority when no curated entry exists.
    pub fn resource(&self, skill: &str) -> LearningResource {
        self.resources
            .get(skill)
            .cloned()
            .unwrap_or_else(|| LearningResource {
                url: format!("https://www.google.com/search?q=learn+{}", url_encode(skill)),
                priority: ResourcePriority::Low,
            })
    }

    pub fn skill_count(&self) -> usize {
        self.vocabulary.len()
    }

    fn default_vocabulary() -> Vec<String> {
        let skills = [
            // Programming languages
            "python",
            "javascript",
            "typescript",
            "java",
            "c++",
            "c#",
            "ruby",
            "go",
            "rust",
            "swift",
            "kotlin",
            "php",
            "scala",
            "r",
            "matlab",
            "perl",
            "shell",
            "bash",
            // Web technologies
            "html",
            "css",
            "react",
            "angular",
            "vue",
            "nextjs",
            "next.js",
            "nodejs",
            "node.js",
            "express",
            "django",
            "flask",
            "spring",
            "asp.net",
            "jquery",
            "bootstrap",
            "tailwind",
            "sass",
            "webpack",
            "vite",
            "graphql",
            "rest api",
            "api",
            // Databases
            "sql",
            "mysql",
            "postgresql",
            "postgres",
            "mongodb",
            "redis",
            "elasticsearch",
            "dynamodb",
            "oracle",
            "sqlite",
            "cassandra",
            "neo4j",
            "database",
            // Cloud & DevOps
            "aws",
            "azure",
            "gcp",
            "google cloud",
            "docker",
            "kubernetes",
            "k8s",
            "jenkins",
            "terraform",
            "ansible",
            "ci/cd",
            "devops",
            "git",
            "github",
            "gitlab",
            "bitbucket",
            "linux",
            "unix",
            // Data science & ML
            "machine learning",
            "deep learning",
            "tensorflow",
            "pytorch",
            "scikit-learn",
            "sklearn",
            "pandas",
            "numpy",
            "data analysis",
            "data visualization",
            "statistics",
            "nlp",
            "computer vision",
            "ai",
            "artificial intelligence",
            "tableau",
            "power bi",
            "powerbi",
            "excel",
            // Soft skills
            "communication",
            "leadership",
            "teamwork",
            "problem solving",
            "agile",
            "scrum",
            "kanban",
            "project management",
            "analytical",
            "creative",
            "adaptability",
            "collaboration",
            "time management",
        ];

        skills.iter().map(|&s| s.to_string()).collect()
    }

    fn default_synonyms() -> Vec<(String, Vec<String>)> {
        let groups: [(&str, &[&str]); 8] = [
            (
                "data visualization",
                &["tableau", "power bi", "powerbi", "charts", "graphs", "dashboards"],
            ),
            (
                "machine learning",
                &["ml", "ai", "artificial intelligence", "predictive modeling"],
            ),
            ("nodejs", &["node.js", "node", "express"]),
            ("nextjs", &["next.js", "next"]),
            ("kubernetes", &["k8s", "container orchestration"]),
            ("postgresql", &["postgres", "psql"]),
            ("scikit-learn", &["sklearn", "scikit learn"]),
            ("google cloud", &["gcp", "google cloud platform"]),
        ];

        groups
            .iter()
            .map(|(canonical, alternates)| {
                (
                    canonical.to_string(),
                    alternates.iter().map(|&s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    fn default_weights() -> HashMap<String, f32> {
        let weights = [
            // High priority technical skills
            ("python", 1.5),
            ("javascript", 1.5),
            ("react", 1.4),
            ("aws", 1.4),
            ("docker", 1.3),
            ("kubernetes", 1.3),
            ("machine learning", 1.5),
            ("sql", 1.4),
            // Medium priority
            ("git", 1.2),
            ("agile", 1.2),
        ];

        weights
            .iter()
            .map(|&(skill, weight)| (skill.to_string(), weight))
            .collect()
    }

    fn default_resources() -> HashMap<String, LearningResource> {
        let resources = [
            (
                "python",
                "https://www.python.org/about/gettingstarted/",
                ResourcePriority::High,
            ),
            (
                "javascript",
                "https://developer.mozilla.org/en-US/docs/Learn/JavaScript",
                ResourcePriority::High,
            ),
            ("react", "https://react.dev/learn", ResourcePriority::High),
            (
                "docker",
                "https://docs.docker.com/get-started/",
                ResourcePriority::High,
            ),
            (
                "kubernetes",
                "https://kubernetes.io/docs/tutorials/",
                ResourcePriority::High,
            ),
            ("aws", "https://aws.amazon.com/training/", ResourcePriority::High),
            (
                "machine learning",
                "https://www.coursera.org/learn/machine-learning",
                ResourcePriority::High,
            ),
            ("sql", "https://www.w3schools.com/sql/", ResourcePriority::Medium),
            ("git", "https://git-scm.com/doc", ResourcePriority::Medium),
            (
                "agile",
                "https://www.atlassian.com/agile",
                ResourcePriority::Medium,
            ),
        ];

        resources
            .iter()
            .map(|&(skill, url, priority)| {
                (
                    skill.to_string(),
                    LearningResource {
                        url: url.to_string(),
                        priority,
                    },
                )
            })
            .collect()
    }

    fn default_high_demand() -> HashSet<String> {
        [
            "python",
            "javascript",
            "typescript",
            "react",
            "aws",
            "docker",
            "kubernetes",
            "machine learning",
            "ai",
            "data analysis",
            "sql",
            "nodejs",
        ]
        .iter()
        .map(|&s| s.to_string())
        .collect()
    }
}

impl Default for SkillDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// Percent-encode a skill name for use in a search URL query parameter
fn url_encode(s: &str) -> String {
    let mut encoded = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_lowercase_and_trimmed() {
        let db = SkillDatabase::new();
        for skill in db.vocabulary() {
            assert_eq!(skill, &skill.trim().to_lowercase());
        }
        for (canonical, alternates) in db.synonyms() {
            assert_eq!(canonical, &canonical.trim().to_lowercase());
            for alt in alternates {
                assert_eq!(alt, &alt.trim().to_lowercase());
            }
        }
    }

    #[test]
    fn test_weight_defaults_to_one() {
        let db = SkillDatabase::new();
        assert_eq!(db.weight("python"), 1.5);
        assert_eq!(db.weight("ruby"), 1.0);
        assert_eq!(db.weight("not a skill"), 1.0);
    }

    #[test]
    fn test_resource_fallback() {
        let db = SkillDatabase::new();

        let curated = db.resource("docker");
        assert_eq!(curated.url, "https://docs.docker.com/get-started/");
        assert_eq!(curated.priority, ResourcePriority::High);

        let fallback = db.resource("c++");
        assert_eq!(fallback.url, "https://www.google.com/search?q=learn+c%2B%2B");
        assert_eq!(fallback.priority, ResourcePriority::Low);
    }

    #[test]
    fn test_priority_sort_order() {
        assert!(ResourcePriority::High < ResourcePriority::Medium);
        assert!(ResourcePriority::Medium < ResourcePriority::Low);
    }

    #[test]
    fn test_additional_skills_are_normalized() {
        let db = SkillDatabase::with_additional_skills(vec![
            "  Terraform Cloud ".to_string(),
            "python".to_string(),
            "".to_string(),
        ]);

        assert!(db.vocabulary().iter().any(|s| s == "terraform cloud"));
        // Existing entries are not duplicated
        assert_eq!(db.vocabulary().iter().filter(|s| *s == "python").count(), 1);
    }

    #[test]
    fn test_url_encoding() {
        assert_eq!(url_encode("machine learning"), "machine%20learning");
        assert_eq!(url_encode("c#"), "c%23");
        assert_eq!(url_encode("node.js"), "node.js");
    }
}
