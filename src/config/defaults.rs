//! Configuration presets.

use super::types::{AppConfig, BehaviorConfig, OutputConfig, ScoringConfig};
use crate::reports::ReportFormat;

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Terminal summary, no thresholds
    Default,
    /// Machine-readable output for pipelines
    Ci,
    /// Reject questionable input and require a Defined maturity
    Strict,
}

/// Minimum score applied by the strict preset (start of the Defined tier).
pub const STRICT_MIN_SCORE: f64 = 71.0;

impl ConfigPreset {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ci => "ci",
            Self::Strict => "strict",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Terminal summary with the top four improvement areas",
            Self::Ci => "JSON output without color for CI pipelines",
            Self::Strict => "Strict input validation and a minimum score of 71 (Defined)",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Ci, Self::Strict]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Ci => Self {
                output: OutputConfig {
                    format: ReportFormat::Json,
                    no_color: true,
                    ..OutputConfig::default()
                },
                behavior: BehaviorConfig { quiet: true },
                ..Self::default()
            },
            ConfigPreset::Strict => Self {
                scoring: ScoringConfig {
                    min_score: Some(STRICT_MIN_SCORE),
                    strict_input: true,
                    ..ScoringConfig::default()
                },
                ..Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Validatable;

    #[test]
    fn test_preset_names_roundtrip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ConfigPreset::from_name("PIPELINE"), Some(ConfigPreset::Ci));
        assert_eq!(ConfigPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in ConfigPreset::all() {
            let config = AppConfig::from_preset(*preset);
            assert!(config.is_valid(), "{preset} preset should validate");
        }
    }

    #[test]
    fn test_strict_preset() {
        let config = AppConfig::from_preset(ConfigPreset::Strict);
        assert!(config.scoring.strict_input);
        assert_eq!(config.scoring.min_score, Some(STRICT_MIN_SCORE));
    }
}
