//! Assessment file loading.
//!
//! Assessment files are JSON or YAML. A file holds either a full
//! [`Assessment`] document or a bare list of parameters.

use crate::error::{CsfIndexError, ErrorContext, LoadErrorKind, Result};
use crate::model::{Assessment, Parameter};
use clap::ValueEnum;
use std::path::Path;

/// Serialization format of an assessment file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AssessmentFormat {
    #[default]
    Json,
    Yaml,
}

impl AssessmentFormat {
    /// Format implied by a file extension, if any.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Guess the format from the first non-whitespace character.
    #[must_use]
    pub fn sniff(content: &str) -> Self {
        match content.trim_start().chars().next() {
            Some('{' | '[') => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Load an assessment, detecting the format by extension and then content.
pub fn load_assessment(path: &Path) -> Result<Assessment> {
    let content = std::fs::read_to_string(path).map_err(|e| CsfIndexError::io(path, e))?;
    let format = AssessmentFormat::from_path(path);
    tracing::debug!(
        "Loading assessment from {} (format: {:?})",
        path.display(),
        format
    );

    let assessment = match format {
        Some(format) => parse_assessment(&content, format),
        None => parse_assessment(&content, AssessmentFormat::sniff(&content)).map_err(|e| {
            if matches!(e, CsfIndexError::Load { source: LoadErrorKind::InvalidYaml(_), .. }) {
                CsfIndexError::unknown_format(path.display().to_string())
            } else {
                e
            }
        }),
    }
    .with_context(|| format!("reading {}", path.display()))?;

    tracing::debug!(
        "Loaded {} parameters from {}",
        assessment.parameters.len(),
        path.display()
    );
    Ok(assessment)
}

/// Serialize an assessment in the given format.
pub fn serialize_assessment(assessment: &Assessment, format: AssessmentFormat) -> Result<String> {
    Ok(match format {
        AssessmentFormat::Json => serde_json::to_string_pretty(assessment)?,
        AssessmentFormat::Yaml => serde_yaml::to_string(assessment)?,
    })
}

/// Parse assessment content, sniffing the format when none is given.
pub fn load_assessment_str(content: &str, format: Option<AssessmentFormat>) -> Result<Assessment> {
    parse_assessment(content, format.unwrap_or_else(|| AssessmentFormat::sniff(content)))
}

fn parse_assessment(content: &str, format: AssessmentFormat) -> Result<Assessment> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Err(CsfIndexError::load(
            "empty document",
            LoadErrorKind::EmptyAssessment,
        ));
    }

    match format {
        AssessmentFormat::Json if trimmed.starts_with('[') => {
            let parameters: Vec<Parameter> = serde_json::from_str(content)?;
            Ok(Assessment::new(parameters))
        }
        AssessmentFormat::Json => Ok(serde_json::from_str(content)?),
        AssessmentFormat::Yaml if is_yaml_sequence(content) => {
            let parameters: Vec<Parameter> = serde_yaml::from_str(content)?;
            Ok(Assessment::new(parameters))
        }
        AssessmentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
    }
}

/// Whether the first YAML content line starts a block sequence.
fn is_yaml_sequence(content: &str) -> bool {
    content
        .lines()
        .map(str::trim_start)
        .find(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with("---"))
        .is_some_and(|line| line.starts_with("- ") || line == "-")
}

/// JSON Schema describing the assessment file format.
pub fn assessment_json_schema() -> std::result::Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(Assessment);
    serde_json::to_string_pretty(&schema)
}
