//! Output formatters for analysis results

use crate::analysis::analyzer::AnalysisResult;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report;
use colored::Colorize;

/// Trait for rendering an analysis result into a displayable string
pub trait OutputFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and compact presentation
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and downstream tooling
pub struct JsonFormatter {
    pretty: bool,
}

/// Plain-text report formatter (the exportable document)
pub struct TextReportFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "red" => text.red().to_string(),
            "cyan" => text.cyan().to_string(),
            "bold" => text.bold().to_string(),
            _ => text.to_string(),
        }
    }

    fn score_color(score: f32) -> &'static str {
        if score >= 75.0 {
            "green"
        } else if score >= 50.0 {
            "yellow"
        } else {
            "red"
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let mut out = String::new();

        let score_line = format!("{:.1}%", result.match_score);
        out.push_str(&format!(
            "\n📊 {} {}\n",
            self.paint("ATS Match Score:", "bold"),
            self.paint(&score_line, Self::score_color(result.match_score))
        ));

        out.push_str(&format!(
            "\n✅ Matched skills ({}):\n",
            result.matched_skills.len()
        ));
        for skill in &result.matched_skills {
            let years = skill
                .years
                .map(|y| format!(", {} years", y))
                .unwrap_or_default();
            let demand = if skill.is_high_demand { " ⭐" } else { "" };
            out.push_str(&format!(
                "  • {} [{}{}]{}\n",
                self.paint(&skill.name, "green"),
                skill.proficiency,
                years,
                demand
            ));
        }

        out.push_str(&format!(
            "\n⚠️  Missing skills ({}):\n",
            result.missing_skills.len()
        ));
        for skill in &result.missing_skills {
            let demand = if skill.is_high_demand { " ⭐" } else { "" };
            out.push_str(&format!(
                "  • {} [priority: {}]{}\n",
                self.paint(&skill.name, "red"),
                skill.priority,
                demand
            ));
            if self.detailed {
                out.push_str(&format!("    Learn at: {}\n", skill.resource));
                if !skill.alternatives.is_empty() {
                    out.push_str(&format!(
                        "    You have: {}\n",
                        skill.alternatives.join(", ")
                    ));
                }
            }
        }

        out.push_str(&format!(
            "\n➕ Additional skills ({}):\n",
            result.extra_skills.len()
        ));
        for skill in &result.extra_skills {
            let demand = if skill.is_high_demand { " ⭐" } else { "" };
            out.push_str(&format!(
                "  • {}{}\n",
                self.paint(&skill.name, "cyan"),
                demand
            ));
        }

        out.push_str(&format!("\n💡 {}\n", self.paint("Suggestions:", "bold")));
        for (i, suggestion) in result.suggestions.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, suggestion));
        }

        out.push_str(&format!(
            "\n{}\n",
            report::recommendation_for(result.match_score)
        ));

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(result)?
        } else {
            serde_json::to_string(result)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for TextReportFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        report::render_text_report(result)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

/// Pick the formatter matching the requested output format
pub fn format_result(
    result: &AnalysisResult,
    format: OutputFormat,
    detailed: bool,
    use_colors: bool,
) -> Result<String> {
    match format {
        OutputFormat::Console => {
            ConsoleFormatter::new(use_colors, detailed).format_result(result)
        }
        OutputFormat::Json => JsonFormatter::default().format_result(result),
        OutputFormat::Text => TextReportFormatter.format_result(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::GapAnalyzer;

    fn sample_result() -> AnalysisResult {
        GapAnalyzer::new()
            .unwrap()
            .analyze("Python and React developer", "Python, Docker and Kubernetes")
    }

    #[test]
    fn test_console_output_without_colors() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_result(&sample_result()).unwrap();

        assert!(output.contains("ATS Match Score:"));
        assert!(output.contains("Matched skills"));
        assert!(output.contains("Missing skills"));
        assert!(output.contains("python"));
        assert!(output.contains("docker"));
        // No ANSI escapes when colors are off
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_console_detailed_shows_resources() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_result(&sample_result()).unwrap();

        assert!(output.contains("Learn at: https://docs.docker.com/get-started/"));
    }

    #[test]
    fn test_json_output_parses_back() {
        let formatter = JsonFormatter::default();
        let output = formatter.format_result(&sample_result()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed["match_score"].is_number());
        assert!(parsed["matched_skills"].is_array());
        assert!(parsed["suggestions"].is_array());
    }

    #[test]
    fn test_dispatch_by_format() {
        let result = sample_result();

        let text = format_result(&result, OutputFormat::Text, false, false).unwrap();
        assert!(text.starts_with("RESUME SKILL GAP ANALYSIS REPORT"));

        let json = format_result(&result, OutputFormat::Json, false, false).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
    }
}
