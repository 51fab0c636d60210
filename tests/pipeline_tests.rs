//! Pipeline and CLI integration tests.
//!
//! These tests exercise the load → validate → score → report path and the
//! CLI command handlers with real fixture files.

use csf_index::cli::{catalog_assessment, run_catalog, run_score, CatalogConfig};
use csf_index::config::{AppConfig, ScoreConfig};
use csf_index::error::{CsfIndexError, LoadErrorKind};
use csf_index::pipeline::{
    exit_codes, load_assessment, validate_assessment, AssessmentFormat, PipelineError,
};
use csf_index::reports::{create_reporter_with_options, ReportConfig, ReportFormat};
use csf_index::scoring::{MaturityLevel, ScoringEngine};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn score_config(name: &str, app: AppConfig) -> ScoreConfig {
    ScoreConfig::from_app(fixture_path(name), app)
}

// ============================================================================
// Load Stage
// ============================================================================

mod load_stage {
    use super::*;

    #[test]
    fn json_and_yaml_fixtures_match() {
        let json = load_assessment(&fixture_path("assessment.json")).expect("json fixture");
        let yaml = load_assessment(&fixture_path("assessment.yaml")).expect("yaml fixture");

        assert_eq!(json, yaml);
        assert_eq!(json.organization.as_deref(), Some("Example Corp"));
        assert!(json.assessed_at.is_some());
        assert_eq!(json.parameters.len(), 4);
    }

    #[test]
    fn bare_list_with_leading_comment() {
        let assessment =
            load_assessment(&fixture_path("questionable.yaml")).expect("questionable fixture");
        assert_eq!(assessment.parameters.len(), 2);
        assert!(assessment.organization.is_none());
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = load_assessment(&fixture_path("invalid.json")).unwrap_err();
        match err {
            CsfIndexError::Load { context, source } => {
                assert!(matches!(source, LoadErrorKind::InvalidJson(_)));
                assert!(context.contains("invalid.json"), "context: {context}");
            }
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[test]
    fn content_sniffing_without_extension() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("assessment");
        std::fs::copy(fixture_path("assessment.json"), &path).unwrap();

        let assessment = load_assessment(&path).expect("sniffed json");
        assert_eq!(assessment.parameters.len(), 4);
    }
}

// ============================================================================
// Validate + Score Stages
// ============================================================================

mod score_stage {
    use super::*;

    #[test]
    fn fixture_scores_seventy() {
        let assessment = load_assessment(&fixture_path("assessment.json")).unwrap();
        assert!(validate_assessment(&assessment).is_empty());

        let result = ScoringEngine::new().compute(&assessment);
        assert!((result.total_score - 70.0).abs() < 1e-9);
        assert_eq!(result.maturity_level, MaturityLevel::Developing);

        let categories: Vec<&str> = result
            .category_scores
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(categories, vec!["Identify", "Protect", "Detect", "Respond"]);

        // RS.MA.S1 has no data yet; meeting its target is still a zero-gain suggestion
        let suggested: Vec<&str> = result
            .improvement_areas
            .iter()
            .map(|a| a.measure_id.as_str())
            .collect();
        assert_eq!(suggested, vec!["ID.AM.S1", "RS.MA.S1"]);
        assert!((result.improvement_areas[0].impact - 20.0).abs() < 1e-9);
        assert_eq!(result.diagnostics.len(), 1);
    }

    #[test]
    fn questionable_input_issues() {
        let assessment = load_assessment(&fixture_path("questionable.yaml")).unwrap();
        let issues = validate_assessment(&assessment);
        let fields: Vec<&str> = issues.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["measureId", "numerator"]);
    }

    #[test]
    fn structured_report_round_trips_result() {
        let assessment = load_assessment(&fixture_path("assessment.yaml")).unwrap();
        let result = ScoringEngine::new().compute(&assessment);
        let output = create_reporter_with_options(ReportFormat::Json, false)
            .generate(&result, &assessment, &ReportConfig::default())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let parsed: csf_index::AssessmentResult =
            serde_json::from_value(value["result"].clone()).unwrap();
        assert_eq!(parsed, result);
    }
}

// ============================================================================
// CLI Handlers
// ============================================================================

mod cli_handlers {
    use super::*;

    #[test]
    fn score_writes_json_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("result.json");
        let app = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(out.clone()))
            .show_parameters(true)
            .quiet(true)
            .build();

        let code = run_score(score_config("assessment.json", app)).expect("score succeeds");
        assert_eq!(code, exit_codes::SUCCESS);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(value["result"]["maturityLevel"], "Developing");
        assert_eq!(value["parameters"].as_array().unwrap().len(), 4);
        assert!(value["metadata"]["source"]
            .as_str()
            .unwrap()
            .ends_with("assessment.json"));
    }

    #[test]
    fn score_below_minimum_returns_exit_code() {
        let tmp = TempDir::new().unwrap();
        let app = AppConfig::builder()
            .min_score(Some(75.0))
            .output_file(Some(tmp.path().join("summary.txt")))
            .quiet(true)
            .build();

        let code = run_score(score_config("assessment.yaml", app)).unwrap();
        assert_eq!(code, exit_codes::BELOW_MIN_SCORE);
    }

    #[test]
    fn score_at_minimum_passes() {
        let tmp = TempDir::new().unwrap();
        let app = AppConfig::builder()
            .min_score(Some(70.0))
            .output_file(Some(tmp.path().join("summary.txt")))
            .quiet(true)
            .build();

        let code = run_score(score_config("assessment.yaml", app)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn strict_mode_rejects_questionable_input() {
        let tmp = TempDir::new().unwrap();
        let app = AppConfig::builder()
            .strict_input(true)
            .output_file(Some(tmp.path().join("summary.txt")))
            .quiet(true)
            .build();

        let err = run_score(score_config("questionable.yaml", app)).unwrap_err();
        let pipeline = err
            .downcast_ref::<PipelineError>()
            .expect("pipeline error");
        assert!(matches!(
            pipeline,
            PipelineError::InvalidInput { issues } if issues.len() == 2
        ));
    }

    #[test]
    fn lenient_mode_scores_questionable_input() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("summary.txt");
        let app = AppConfig::builder()
            .output_file(Some(out.clone()))
            .quiet(true)
            .build();

        let code = run_score(score_config("questionable.yaml", app)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
        let summary = std::fs::read_to_string(out).unwrap();
        assert!(summary.contains("Index:"));
        assert!(!summary.contains('\x1b'), "file output is never colored");
    }

    #[test]
    fn missing_file_fails_validation() {
        let app = AppConfig::default();
        let err = run_score(score_config("does-not-exist.json", app)).unwrap_err();
        assert!(err.to_string().contains("Assessment file not found"));
    }

    #[test]
    fn invalid_limit_fails_validation() {
        let app = AppConfig::builder().improvement_limit(0).build();
        let err = run_score(score_config("assessment.json", app)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CsfIndexError>(),
            Some(CsfIndexError::Config(message)) if message.contains("scoring.improvement_limit")
        ));
        assert!(err.to_string().starts_with("Invalid configuration"));
    }

    #[test]
    fn invalid_fixture_is_load_failure() {
        let err = run_score(score_config("invalid.json", AppConfig::default())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::LoadFailed { .. })
        ));
    }

    #[test]
    fn catalog_template_is_scorable() {
        let tmp = TempDir::new().unwrap();
        let template = tmp.path().join("template.yaml");
        run_catalog(CatalogConfig {
            format: AssessmentFormat::Yaml,
            output_file: Some(template.clone()),
            quiet: true,
            ..CatalogConfig::default()
        })
        .unwrap();

        let app = AppConfig::builder()
            .output_file(Some(tmp.path().join("summary.txt")))
            .quiet(true)
            .build();
        let code = run_score(ScoreConfig::from_app(template, app)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn sample_catalog_is_deterministic() {
        let config = CatalogConfig {
            sample: true,
            seed: 1234,
            ..CatalogConfig::default()
        };
        assert_eq!(catalog_assessment(&config), catalog_assessment(&config));
    }
}
