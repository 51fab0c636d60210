//! Control parameter types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for parameters that carry no framework category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One measurable control in an assessment.
///
/// A parameter's score is derived from `numerator / denominator` and the
/// scoring policy selected by `target`. The cached `self_assessment_score`
/// is informational only and is never read by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Stable identifier within the catalog
    pub id: u32,
    /// Control family code, e.g. `ID.AM.S1`
    pub measure_id: String,
    /// Short human-readable name
    #[serde(default)]
    pub title: String,
    /// Measured count
    #[serde(default)]
    pub numerator: f64,
    /// Population the numerator is measured against
    #[serde(default)]
    pub denominator: f64,
    /// Percentage that represents full compliance (100, 0 or 50)
    pub target: f64,
    /// Share of the total index, in percent
    pub weightage: f64,
    /// Cached score, recomputed on every evaluation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_assessment_score: Option<f64>,
    /// Descriptive label such as `Identify: Asset Management`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework_category: Option<String>,
    /// Free-text evidence supplied by the assessor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

impl Parameter {
    /// Create a parameter with zeroed measurements.
    #[must_use]
    pub fn new(
        id: u32,
        measure_id: impl Into<String>,
        title: impl Into<String>,
        target: f64,
        weightage: f64,
    ) -> Self {
        Self {
            id,
            measure_id: measure_id.into(),
            title: title.into(),
            numerator: 0.0,
            denominator: 0.0,
            target,
            weightage,
            self_assessment_score: None,
            framework_category: None,
            evidence: None,
        }
    }

    /// Set the measurement pair.
    #[must_use]
    pub fn with_measurement(mut self, numerator: f64, denominator: f64) -> Self {
        self.numerator = numerator;
        self.denominator = denominator;
        self
    }

    /// Set the framework category label.
    #[must_use]
    pub fn with_category(mut self, label: impl Into<String>) -> Self {
        self.framework_category = Some(label.into());
        self
    }

    /// Scoring policy selected by this parameter's target.
    #[must_use]
    pub fn policy(&self) -> TargetPolicy {
        TargetPolicy::from_target(self.target)
    }

    /// Top-level category name: the framework category text before the first `:`.
    #[must_use]
    pub fn category_name(&self) -> &str {
        match self.framework_category.as_deref() {
            Some(label) => {
                let head = label.split(':').next().unwrap_or(label).trim();
                if head.is_empty() { UNCATEGORIZED } else { head }
            }
            None => UNCATEGORIZED,
        }
    }

    /// Copy of this parameter whose numerator exactly meets its target ratio.
    #[must_use]
    pub fn at_target(&self) -> Self {
        let mut hypothetical = self.clone();
        hypothetical.numerator = self.denominator * self.target / 100.0;
        hypothetical
    }
}

/// Scoring policy keyed by a parameter's numeric target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "policy", content = "target", rename_all = "kebab-case")]
pub enum TargetPolicy {
    /// Target 100: higher is better, capped at 100
    MaximizeToTarget,
    /// Target 0: lower is better (e.g. incident counts)
    MinimizeToZero,
    /// Target 50: reaching half is full credit
    SatisfyAtHalf,
    /// Any other target; scores 0
    Unknown(f64),
}

impl TargetPolicy {
    /// Derive the policy from a target percentage.
    #[must_use]
    pub fn from_target(target: f64) -> Self {
        if target == 100.0 {
            Self::MaximizeToTarget
        } else if target == 0.0 {
            Self::MinimizeToZero
        } else if target == 50.0 {
            Self::SatisfyAtHalf
        } else {
            Self::Unknown(target)
        }
    }

    /// Whether the policy has defined scoring semantics.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MaximizeToTarget => "maximize",
            Self::MinimizeToZero => "minimize",
            Self::SatisfyAtHalf => "satisfy-at-half",
            Self::Unknown(_) => "unknown",
        }
    }
}

impl fmt::Display for TargetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(target) => write!(f, "unknown (target {target})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Top-level framework category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    Governance,
    Identify,
    Protect,
    Detect,
    Respond,
    Recover,
}

impl Category {
    /// Measure id prefix for this category.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Governance => "GV",
            Self::Identify => "ID",
            Self::Protect => "PR",
            Self::Detect => "DE",
            Self::Respond => "RS",
            Self::Recover => "RC",
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Governance => "Governance",
            Self::Identify => "Identify",
            Self::Protect => "Protect",
            Self::Detect => "Detect",
            Self::Respond => "Respond",
            Self::Recover => "Recover",
        }
    }

    /// Parse a two-letter category code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "GV" => Some(Self::Governance),
            "ID" => Some(Self::Identify),
            "PR" => Some(Self::Protect),
            "DE" => Some(Self::Detect),
            "RS" => Some(Self::Respond),
            "RC" => Some(Self::Recover),
            _ => None,
        }
    }

    /// Category identified by a measure id's prefix before the first `.`.
    #[must_use]
    pub fn from_measure_id(measure_id: &str) -> Option<Self> {
        measure_id.split('.').next().and_then(Self::from_code)
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Governance,
            Self::Identify,
            Self::Protect,
            Self::Detect,
            Self::Respond,
            Self::Recover,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_target() {
        assert_eq!(TargetPolicy::from_target(100.0), TargetPolicy::MaximizeToTarget);
        assert_eq!(TargetPolicy::from_target(0.0), TargetPolicy::MinimizeToZero);
        assert_eq!(TargetPolicy::from_target(50.0), TargetPolicy::SatisfyAtHalf);
        assert_eq!(TargetPolicy::from_target(75.0), TargetPolicy::Unknown(75.0));
        assert!(!TargetPolicy::from_target(75.0).is_known());
    }

    #[test]
    fn test_category_name_from_label() {
        let p = Parameter::new(1, "ID.AM.S1", "Assets", 100.0, 5.0)
            .with_category("Identify: Asset Management");
        assert_eq!(p.category_name(), "Identify");

        let bare = Parameter::new(2, "ID.AM.S2", "Assets", 100.0, 5.0).with_category("Protect");
        assert_eq!(bare.category_name(), "Protect");
    }

    #[test]
    fn test_category_name_missing() {
        let p = Parameter::new(1, "ID.AM.S1", "Assets", 100.0, 5.0);
        assert_eq!(p.category_name(), UNCATEGORIZED);

        let empty = p.with_category(" : Asset Management");
        assert_eq!(empty.category_name(), UNCATEGORIZED);
    }

    #[test]
    fn test_category_from_measure_id() {
        assert_eq!(Category::from_measure_id("ID.AM.S1"), Some(Category::Identify));
        assert_eq!(Category::from_measure_id("gv.oc.s1"), Some(Category::Governance));
        assert_eq!(Category::from_measure_id("XX.AM.S1"), None);
        assert_eq!(Category::from_measure_id(""), None);
    }

    #[test]
    fn test_at_target() {
        let p = Parameter::new(1, "PR.AA.S2", "Dormant", 50.0, 3.0).with_measurement(5.0, 40.0);
        let hypothetical = p.at_target();
        assert_eq!(hypothetical.numerator, 20.0);
        assert_eq!(hypothetical.denominator, 40.0);
        assert_eq!(p.numerator, 5.0);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = r#"{"id":7,"measureId":"DE.CM.S2","target":0,"weightage":4,"numerator":1,"denominator":10}"#;
        let p: Parameter = serde_json::from_str(json).expect("parameter should deserialize");
        assert_eq!(p.measure_id, "DE.CM.S2");
        assert_eq!(p.policy(), TargetPolicy::MinimizeToZero);
        assert!(p.title.is_empty());
    }
}
