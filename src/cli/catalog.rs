//! Catalog command handler.
//!
//! Prints the blank control catalog as an assessment template, or a
//! generated sample assessment for demos and testing.

use crate::model::{catalog, Assessment};
use crate::pipeline::{serialize_assessment, write_output, AssessmentFormat, OutputTarget};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Catalog command configuration
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Emit generated measurements instead of the blank template
    pub sample: bool,
    /// Seed for the sample generator
    pub seed: u64,
    /// Organization name to stamp on the output
    pub organization: Option<String>,
    pub format: AssessmentFormat,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

/// Build the assessment the catalog command prints.
#[must_use]
pub fn catalog_assessment(config: &CatalogConfig) -> Assessment {
    let assessment = if config.sample {
        tracing::debug!("Generating sample assessment with seed {}", config.seed);
        catalog::sample_assessment(config.seed).with_cached_scores()
    } else {
        Assessment::from_catalog()
    };

    match &config.organization {
        Some(name) => assessment.with_organization(name.clone()),
        None => assessment,
    }
}

/// Run the catalog command.
pub fn run_catalog(config: CatalogConfig) -> Result<()> {
    let assessment = catalog_assessment(&config);
    let rendered = serialize_assessment(&assessment, config.format)
        .context("failed to serialize catalog")?;

    let target = OutputTarget::from_option(config.output_file);
    write_output(rendered.trim_end(), &target, config.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_catalog() {
        let assessment = catalog_assessment(&CatalogConfig::default());
        assert_eq!(assessment.parameters.len(), catalog::default_catalog().len());
        assert!(assessment.organization.is_none());
        assert!(assessment
            .parameters
            .iter()
            .all(|p| p.self_assessment_score.is_none()));
    }

    #[test]
    fn test_sample_has_cached_scores_and_organization() {
        let config = CatalogConfig {
            sample: true,
            seed: 9,
            organization: Some("Acme".to_string()),
            ..CatalogConfig::default()
        };
        let assessment = catalog_assessment(&config);
        assert_eq!(assessment.organization.as_deref(), Some("Acme"));
        assert!(assessment
            .parameters
            .iter()
            .all(|p| p.self_assessment_score.is_some()));
    }

    #[test]
    fn test_run_catalog_writes_yaml() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("catalog.yaml");
        run_catalog(CatalogConfig {
            format: AssessmentFormat::Yaml,
            output_file: Some(path.clone()),
            quiet: true,
            ..CatalogConfig::default()
        })
        .unwrap();

        let loaded = crate::pipeline::load_assessment(&path).unwrap();
        assert_eq!(loaded, Assessment::from_catalog());
    }
}
