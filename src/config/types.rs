//! Configuration types for csf-index operations.

use crate::reports::ReportFormat;
use crate::scoring::DEFAULT_IMPROVEMENT_LIMIT;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments override file settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring options (improvement limit, thresholds)
    pub scoring: ScoringConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set how many improvement areas to report.
    pub const fn improvement_limit(mut self, limit: usize) -> Self {
        self.config.scoring.improvement_limit = limit;
        self
    }

    /// Fail when the total index is below this score.
    pub const fn min_score(mut self, score: Option<f64>) -> Self {
        self.config.scoring.min_score = score;
        self
    }

    /// Treat input validation warnings as errors.
    pub const fn strict_input(mut self, strict: bool) -> Self {
        self.config.scoring.strict_input = strict;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Include per-parameter scores in output.
    pub const fn show_parameters(mut self, show: bool) -> Self {
        self.config.output.show_parameters = show;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-line Overrides
// ============================================================================

/// Values given explicitly on the command line.
///
/// `None` means the flag was absent and the layered config value stands.
/// Presence flags (`--strict`, `--quiet`) are `Some(true)` when given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub improvement_limit: Option<usize>,
    pub min_score: Option<f64>,
    pub strict_input: Option<bool>,
    pub format: Option<ReportFormat>,
    pub file: Option<PathBuf>,
    pub no_color: Option<bool>,
    pub show_parameters: Option<bool>,
    pub quiet: Option<bool>,
}

impl ConfigOverrides {
    /// Map a presence flag to an override.
    #[must_use]
    pub const fn flag(set: bool) -> Option<bool> {
        if set {
            Some(true)
        } else {
            None
        }
    }
}

impl AppConfig {
    /// Apply command-line overrides on top of this config.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(limit) = overrides.improvement_limit {
            self.scoring.improvement_limit = limit;
        }
        if overrides.min_score.is_some() {
            self.scoring.min_score = overrides.min_score;
        }
        if let Some(strict) = overrides.strict_input {
            self.scoring.strict_input = strict;
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.file.is_some() {
            self.output.file.clone_from(&overrides.file);
        }
        if let Some(no_color) = overrides.no_color {
            self.output.no_color = no_color;
        }
        if let Some(show) = overrides.show_parameters {
            self.output.show_parameters = show;
        }
        if let Some(quiet) = overrides.quiet {
            self.behavior.quiet = quiet;
        }
    }
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Number of improvement areas to report (1-50)
    pub improvement_limit: usize,
    /// Minimum acceptable total index (0-100); below it the CLI exits with code 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Reject assessments with input validation issues instead of warning
    pub strict_input: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            improvement_limit: DEFAULT_IMPROVEMENT_LIMIT,
            min_score: None,
            strict_input: false,
        }
    }
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (stdout if None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Include every parameter's score
    pub show_parameters: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Command Configurations
// ============================================================================

/// Configuration for the `score` command.
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Assessment file to score
    pub path: PathBuf,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}

impl ScoreConfig {
    /// Build from a resolved application config.
    #[must_use]
    pub fn from_app(path: PathBuf, app: AppConfig) -> Self {
        Self {
            path,
            scoring: app.scoring,
            output: app.output,
            behavior: app.behavior,
        }
    }
}
