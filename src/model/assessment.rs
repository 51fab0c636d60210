//! Assessment: the immutable input handed to the scoring engine.

use super::catalog::default_catalog;
use super::parameter::Parameter;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A full set of parameter measurements for one organization.
///
/// Callers edit an assessment between evaluations; the engine only ever
/// borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Organization being assessed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// When the measurements were taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<DateTime<Utc>>,
    /// Measured parameters, in catalog order
    pub parameters: Vec<Parameter>,
}

impl Default for Assessment {
    fn default() -> Self {
        Self::from_catalog()
    }
}

impl Assessment {
    /// Create an assessment over the given parameters.
    #[must_use]
    pub const fn new(parameters: Vec<Parameter>) -> Self {
        Self {
            organization: None,
            assessed_at: None,
            parameters,
        }
    }

    /// Start a blank assessment from the static catalog.
    #[must_use]
    pub fn from_catalog() -> Self {
        Self::new(default_catalog())
    }

    /// Set the organization name.
    #[must_use]
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Restore every parameter to the initial catalog.
    ///
    /// The organization name is kept.
    pub fn reset(&mut self) {
        self.parameters = default_catalog();
        self.assessed_at = None;
    }

    /// Look up a parameter by id.
    #[must_use]
    pub fn parameter(&self, id: u32) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.id == id)
    }

    /// Look up a parameter by measure id.
    #[must_use]
    pub fn by_measure_id(&self, measure_id: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.measure_id == measure_id)
    }

    /// Record a measurement for the parameter with `id`.
    ///
    /// Returns `false` if no such parameter exists.
    pub fn set_measurement(&mut self, id: u32, numerator: f64, denominator: f64) -> bool {
        match self.parameters.iter_mut().find(|p| p.id == id) {
            Some(parameter) => {
                parameter.numerator = numerator;
                parameter.denominator = denominator;
                true
            }
            None => false,
        }
    }

    /// Sum of all parameter weightages.
    #[must_use]
    pub fn total_weightage(&self) -> f64 {
        self.parameters.iter().map(|p| p.weightage).sum()
    }

    /// Copy of this assessment with every cached score refreshed.
    #[must_use]
    pub fn with_cached_scores(&self) -> Self {
        let mut refreshed = self.clone();
        for parameter in &mut refreshed.parameters {
            parameter.self_assessment_score = Some(crate::scoring::score(parameter));
        }
        refreshed
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
