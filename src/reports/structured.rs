//! JSON and YAML report generators.
//!
//! Both formats serialize the same [`StructuredReport`] document.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::Assessment;
use crate::scoring::{score, weighted_score, AssessmentResult};
use chrono::Utc;
use serde::Serialize;

/// Serializable report document shared by the structured formats.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredReport<'a> {
    pub metadata: StructuredMetadata<'a>,
    pub result: &'a AssessmentResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterRow<'a>>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredMetadata<'a> {
    pub tool: ToolInfo,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Per-parameter score row
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterRow<'a> {
    pub id: u32,
    pub measure_id: &'a str,
    pub title: &'a str,
    pub category: &'a str,
    pub policy: &'static str,
    pub score: f64,
    pub weighted_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<&'a str>,
}

impl<'a> StructuredReport<'a> {
    /// Build the report document.
    #[must_use]
    pub fn build(
        result: &'a AssessmentResult,
        assessment: &'a Assessment,
        config: &'a ReportConfig,
    ) -> Self {
        let parameters = config.show_parameters.then(|| {
            assessment
                .parameters
                .iter()
                .map(|p| ParameterRow {
                    id: p.id,
                    measure_id: &p.measure_id,
                    title: &p.title,
                    category: p.category_name(),
                    policy: p.policy().name(),
                    score: score(p),
                    weighted_score: weighted_score(p),
                    evidence: p.evidence.as_deref(),
                })
                .collect()
        });

        Self {
            metadata: StructuredMetadata {
                tool: ToolInfo {
                    name: "csf-index".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: config
                    .metadata
                    .generated_at
                    .clone()
                    .unwrap_or_else(|| Utc::now().to_rfc3339()),
                source: config.metadata.source_path.as_deref(),
                organization: assessment.organization.as_deref(),
            },
            result,
            parameters,
        }
    }
}

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        result: &AssessmentResult,
        assessment: &Assessment,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = StructuredReport::build(result, assessment, config);
        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

/// YAML report generator
#[derive(Default)]
pub struct YamlReporter;

impl YamlReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for YamlReporter {
    fn generate(
        &self,
        result: &AssessmentResult,
        assessment: &Assessment,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = StructuredReport::build(result, assessment, config);
        serde_yaml::to_string(&report).map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Yaml
    }
}
