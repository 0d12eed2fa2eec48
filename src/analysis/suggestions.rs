//! Resume improvement suggestions

use crate::analysis::analyzer::{MatchedSkill, MissingSkill};
use regex::Regex;

/// Build the ordered suggestion list for an analysis.
///
/// The list has a fixed shape: matched-skill highlight (when any matched),
/// learning suggestion for the top missing skills (when any missing), two
/// constant resume tips, and a years-of-experience note when the job text
/// states one. `missing` must already be in its final sorted order.
pub fn generate_suggestions(
    matched: &[MatchedSkill],
    missing: &[MissingSkill],
    job_text: &str,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !matched.is_empty() {
        let top_matched: Vec<&str> = matched.iter().take(3).map(|s| s.name.as_str()).collect();
        suggestions.push(format!(
            "Highlight your experience with {} prominently in your resume summary.",
            top_matched.join(", ")
        ));
    }

    if !missing.is_empty() {
        let top_missing: Vec<&str> = missing.iter().take(3).map(|s| s.name.as_str()).collect();
        suggestions.push(format!(
            "Consider learning {} to match job requirements. Even basic knowledge can help pass ATS screening.",
            top_missing.join(", ")
        ));
    }

    suggestions.push(
        "Use numbers and metrics to quantify your achievements (e.g., 'Improved performance by 40%' instead of 'Improved performance').".to_string(),
    );

    suggestions.push(
        "Mirror the language used in the job description to improve ATS matching and recruiter appeal.".to_string(),
    );

    // Not skill-scoped: any years figure stated anywhere in the job text
    let years_regex =
        Regex::new(r"(?i)(\d+)\s*\+?\s*(?:years?|yrs?)").expect("Invalid years regex");
    if let Some(caps) = years_regex.captures(job_text) {
        suggestions.push(format!(
            "Ensure you clearly state your total years of experience. The job requires {}+ years.",
            &caps[1]
        ));
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::database::ResourcePriority;
    use crate::analysis::proficiency::SkillLevel;

    fn matched(name: &str) -> MatchedSkill {
        MatchedSkill {
            name: name.to_string(),
            proficiency: SkillLevel::Intermediate,
            years: None,
            is_high_demand: false,
        }
    }

    fn missing(name: &str) -> MissingSkill {
        MissingSkill {
            name: name.to_string(),
            resource: "https://example.com".to_string(),
            priority: ResourcePriority::Low,
            is_high_demand: false,
            alternatives: Vec::new(),
        }
    }

    #[test]
    fn test_full_suggestion_list_order() {
        let matched = vec![matched("python"), matched("react"), matched("sql"), matched("git")];
        let missing = vec![missing("docker"), missing("kubernetes")];

        let suggestions =
            generate_suggestions(&matched, &missing, "We require 3+ years of experience");

        assert_eq!(suggestions.len(), 5);
        assert!(suggestions[0].contains("python, react, sql"));
        assert!(!suggestions[0].contains("git"), "only the first three are named");
        assert!(suggestions[1].contains("docker, kubernetes"));
        assert!(suggestions[2].contains("quantify your achievements"));
        assert!(suggestions[3].contains("Mirror the language"));
        assert!(suggestions[4].contains("The job requires 3+ years."));
    }

    #[test]
    fn test_conditional_items_omitted() {
        let suggestions = generate_suggestions(&[], &[], "no requirements here");

        // Only the two constant tips remain
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].contains("quantify your achievements"));
        assert!(suggestions[1].contains("Mirror the language"));
    }

    #[test]
    fn test_years_pattern_variants() {
        let suggestions = generate_suggestions(&[], &[], "minimum 7 yrs required");
        assert!(suggestions
            .last()
            .unwrap()
            .contains("The job requires 7+ years."));
    }
}
