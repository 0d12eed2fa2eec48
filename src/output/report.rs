//! Plain-text report export with a fixed template

use crate::analysis::analyzer::AnalysisResult;
use crate::error::Result;
use askama::Template;
use chrono::Local;

#[derive(Template)]
#[template(
    source = "RESUME SKILL GAP ANALYSIS REPORT
=================================
Generated: {{ generated_at }}

ATS MATCH SCORE: {{ match_score }}%

MATCHED SKILLS ({{ matched_count }}):
{% for line in matched_lines %}{{ line }}
{% endfor %}
MISSING SKILLS ({{ missing_count }}):
{% for block in missing_blocks %}{{ block }}
{% endfor %}
ADDITIONAL SKILLS FROM YOUR RESUME ({{ extra_count }}):
{% for line in extra_lines %}{{ line }}
{% endfor %}
RESUME IMPROVEMENT SUGGESTIONS:
{% for suggestion in suggestions %}{{ loop.index }}. {{ suggestion }}
{% endfor %}
RECOMMENDATIONS:
{{ recommendation }}
",
    ext = "txt"
)]
struct TextReportTemplate {
    generated_at: String,
    match_score: String,
    matched_count: usize,
    matched_lines: Vec<String>,
    missing_count: usize,
    missing_blocks: Vec<String>,
    extra_count: usize,
    extra_lines: Vec<String>,
    suggestions: Vec<String>,
    recommendation: String,
}

/// Render an analysis result as a human-readable plain-text report
pub fn render_text_report(result: &AnalysisResult) -> Result<String> {
    let matched_lines = result
        .matched_skills
        .iter()
        .map(|skill| {
            let years = skill
                .years
                .map(|y| format!(" - {} years", y))
                .unwrap_or_default();
            format!(
                "✓ {} [{}]{}{}",
                skill.name.to_uppercase(),
                skill.proficiency,
                years,
                demand_marker(skill.is_high_demand)
            )
        })
        .collect();

    let missing_blocks = result
        .missing_skills
        .iter()
        .map(|skill| {
            let mut block = format!(
                "✗ {} [Priority: {}]{}\n  Learn at: {}",
                skill.name.to_uppercase(),
                skill.priority,
                demand_marker(skill.is_high_demand),
                skill.resource
            );
            if !skill.alternatives.is_empty() {
                block.push_str(&format!("\n  You have: {}", skill.alternatives.join(", ")));
            }
            block
        })
        .collect();

    let extra_lines = result
        .extra_skills
        .iter()
        .map(|skill| format!("• {}{}", skill.name, demand_marker(skill.is_high_demand)))
        .collect();

    let template = TextReportTemplate {
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        match_score: format!("{:.1}", result.match_score),
        matched_count: result.matched_skills.len(),
        matched_lines,
        missing_count: result.missing_skills.len(),
        missing_blocks,
        extra_count: result.extra_skills.len(),
        extra_lines,
        suggestions: result.suggestions.clone(),
        recommendation: recommendation_for(result.match_score).to_string(),
    };

    Ok(template.render()?)
}

fn demand_marker(is_high_demand: bool) -> &'static str {
    if is_high_demand {
        " ⭐ HIGH DEMAND"
    } else {
        ""
    }
}

/// Closing recommendation banded on the match score
pub fn recommendation_for(match_score: f32) -> &'static str {
    if match_score >= 75.0 {
        "Excellent match! You have most of the required skills. Focus on the high-priority missing skills to become a perfect candidate."
    } else if match_score >= 50.0 {
        "Good foundation! You have several key skills. Prioritize learning the high-demand missing skills to improve your candidacy."
    } else {
        "Focus on skill development. Consider gaining experience in the high-priority and high-demand missing skills before applying."
    }
}
