//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable view for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::Assessment;
use crate::scoring::{score, AssessmentResult, MaturityLevel};
use unicode_width::UnicodeWidthStr;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Pad `text` with spaces to a display width of `width` columns.
fn pad(text: &str, width: usize) -> String {
    let shown = UnicodeWidthStr::width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(shown)))
}

const fn maturity_color(level: MaturityLevel) -> &'static str {
    match level {
        MaturityLevel::Managed | MaturityLevel::Optimized => "green",
        MaturityLevel::Developing | MaturityLevel::Defined => "yellow",
        MaturityLevel::Insufficient | MaturityLevel::Initial => "red",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        result: &AssessmentResult,
        assessment: &Assessment,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color("Self-Assessment Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        if let Some(organization) = &assessment.organization {
            lines.push(format!("{}  {organization}", self.color("Organization:", "cyan")));
        }
        if let Some(source) = &config.metadata.source_path {
            lines.push(format!("{}  {source}", self.color("Source:", "cyan")));
        }
        lines.push(format!(
            "{}  {} parameters",
            self.color("Size:", "cyan"),
            assessment.parameters.len()
        ));
        lines.push(String::new());

        let color = maturity_color(result.maturity_level);
        lines.push(format!(
            "{} {} ({})",
            self.color("Index:", "bold"),
            self.color(&format!("{:.2}/100", result.total_score), color),
            self.color(result.maturity_level.name(), color)
        ));
        lines.push(format!("  {}", self.color(&result.maturity_description, "dim")));
        lines.push(String::new());

        if !result.category_scores.is_empty() {
            let width = result
                .category_scores
                .iter()
                .map(|c| UnicodeWidthStr::width(c.category.as_str()))
                .max()
                .unwrap_or(0);
            lines.push(self.color("Categories:", "bold"));
            for category in &result.category_scores {
                lines.push(format!(
                    "  {}  {:>6.2}  ({} parameters, weight {:.0})",
                    pad(&category.category, width),
                    category.score,
                    category.parameter_count,
                    category.total_weightage
                ));
            }
            lines.push(String::new());
        }

        lines.push(self.color("Improvement Areas:", "bold"));
        if result.improvement_areas.is_empty() {
            lines.push(format!("  {}", self.color("All parameters meet their targets", "dim")));
        }
        for (rank, area) in result.improvement_areas.iter().enumerate() {
            lines.push(format!(
                "  {}. {} {}  {} (currently {:.1})",
                rank + 1,
                self.color(&area.measure_id, "cyan"),
                area.title,
                self.color(&format!("+{:.2}", area.impact), "green"),
                area.current_score
            ));
        }

        if config.show_parameters {
            lines.push(String::new());
            lines.push(self.color("Parameters:", "bold"));
            let width = assessment
                .parameters
                .iter()
                .map(|p| UnicodeWidthStr::width(p.measure_id.as_str()))
                .max()
                .unwrap_or(0);
            for parameter in &assessment.parameters {
                lines.push(format!(
                    "  {}  {:>6.2}  {}",
                    pad(&parameter.measure_id, width),
                    score(parameter),
                    parameter.title
                ));
            }
        }

        if !result.diagnostics.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Data Quality:", "yellow"));
            for issue in &result.diagnostics {
                lines.push(format!("  {} {issue}", self.color("!", "yellow")));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
