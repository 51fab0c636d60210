//! Static parameter catalog and sample data generation.
//!
//! The catalog is the initial state of every assessment: 23 controls grouped
//! under the six framework categories, with weightages summing to 100 and all
//! measurements zeroed.

use super::assessment::Assessment;
use super::parameter::{Category, Parameter, TargetPolicy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Catalog rows: (id, measure id, title, subcategory, target, weightage)
#[rustfmt::skip]
const CATALOG: &[(u32, &str, &str, &str, f64, f64)] = &[
    (1, "GV.OC.S1", "Cybersecurity policies approved by leadership", "Organizational Context", 100.0, 5.0),
    (2, "GV.RM.S1", "Risk assessments completed on schedule", "Risk Management Strategy", 100.0, 4.0),
    (3, "GV.RR.S1", "Security roles with trained owners", "Roles and Responsibilities", 100.0, 4.0),
    (4, "GV.SC.S1", "Critical suppliers assessed for cyber risk", "Supply Chain Risk Management", 100.0, 4.0),
    (5, "ID.AM.S1", "Hardware assets inventoried", "Asset Management", 100.0, 5.0),
    (6, "ID.AM.S2", "Software assets inventoried", "Asset Management", 100.0, 4.0),
    (7, "ID.RA.S1", "Critical vulnerabilities remediated within SLA", "Risk Assessment", 100.0, 5.0),
    (8, "ID.IM.S1", "Prior assessment actions closed", "Improvement", 50.0, 3.0),
    (9, "PR.AA.S1", "Privileged accounts protected by MFA", "Identity Management and Access Control", 100.0, 6.0),
    (10, "PR.AA.S2", "Dormant accounts disabled", "Identity Management and Access Control", 100.0, 3.0),
    (11, "PR.AT.S1", "Staff completing awareness training", "Awareness and Training", 100.0, 4.0),
    (12, "PR.DS.S1", "Sensitive data stores encrypted at rest", "Data Security", 100.0, 5.0),
    (13, "PR.PS.S1", "Endpoints with current security patches", "Platform Security", 100.0, 5.0),
    (14, "PR.IR.S1", "Backups verified by test restoration", "Technology Infrastructure Resilience", 50.0, 3.0),
    (15, "DE.CM.S1", "Systems forwarding logs to central monitoring", "Continuous Monitoring", 100.0, 5.0),
    (16, "DE.CM.S2", "Endpoints with malware infections", "Continuous Monitoring", 0.0, 4.0),
    (17, "DE.AE.S1", "Alerts triaged within the defined timeframe", "Adverse Event Analysis", 100.0, 4.0),
    (18, "RS.MA.S1", "Incidents handled under the response plan", "Incident Management", 100.0, 5.0),
    (19, "RS.AN.S1", "Incidents with completed root-cause analysis", "Incident Analysis", 50.0, 3.0),
    (20, "RS.CO.S1", "Reportable incidents notified late", "Incident Response Reporting and Communication", 0.0, 4.0),
    (21, "RC.RP.S1", "Critical systems with tested recovery plans", "Incident Recovery Plan Execution", 100.0, 6.0),
    (22, "RC.RP.S2", "Recoveries exceeding the recovery time objective", "Incident Recovery Plan Execution", 0.0, 5.0),
    (23, "RC.CO.S1", "Recovery exercises including stakeholder communication", "Incident Recovery Communication", 50.0, 4.0),
];

/// Largest denominator produced by the sample generator.
const SAMPLE_MAX_DENOMINATOR: u32 = 200;

/// Build the initial parameter catalog.
///
/// Framework categories are derived from each measure id's prefix.
#[must_use]
pub fn default_catalog() -> Vec<Parameter> {
    CATALOG
        .iter()
        .map(|&(id, measure_id, title, subcategory, target, weightage)| {
            let mut parameter = Parameter::new(id, measure_id, title, target, weightage);
            parameter.framework_category = Category::from_measure_id(measure_id)
                .map(|category| format!("{}: {subcategory}", category.name()));
            parameter
        })
        .collect()
}

/// Generate a deterministic sample assessment for demos and tests.
///
/// Measurements are whole numbers with `1 <= denominator <= 200` and
/// `0 <= numerator <= denominator`, skewed so each policy lands in a
/// plausible range.
#[must_use]
pub fn sample_assessment(seed: u64) -> Assessment {
    let mut rng = StdRng::seed_from_u64(seed);
    let parameters = default_catalog()
        .into_iter()
        .map(|parameter| {
            let denominator = rng.gen_range(1..=SAMPLE_MAX_DENOMINATOR);
            let (low, high) = match parameter.policy() {
                TargetPolicy::MaximizeToTarget => (denominator * 2 / 5, denominator),
                TargetPolicy::MinimizeToZero => (0, denominator / 5),
                TargetPolicy::SatisfyAtHalf | TargetPolicy::Unknown(_) => {
                    (0, denominator * 4 / 5)
                }
            };
            let numerator = rng.gen_range(low..=high);
            parameter.with_measurement(f64::from(numerator), f64::from(denominator))
        })
        .collect();

    tracing::debug!(seed, "generated sample assessment");
    Assessment {
        organization: Some("Sample Organization".to_string()),
        assessed_at: None,
        parameters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_weightage_sums_to_100() {
        let total: f64 = default_catalog().iter().map(|p| p.weightage).sum();
        assert!((total - 100.0).abs() < 1e-9, "catalog weightage sums to {total}");
    }

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 23);
        let ids: HashSet<u32> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
        let measures: HashSet<&str> = catalog.iter().map(|p| p.measure_id.as_str()).collect();
        assert_eq!(measures.len(), catalog.len());
    }

    #[test]
    fn test_catalog_targets_are_known_policies() {
        for parameter in default_catalog() {
            assert!(
                parameter.policy().is_known(),
                "{} has unknown target {}",
                parameter.measure_id,
                parameter.target
            );
        }
    }

    #[test]
    fn test_catalog_every_category_covered() {
        let catalog = default_catalog();
        for category in Category::all() {
            assert!(
                catalog.iter().any(|p| p.category_name() == category.name()),
                "no parameter for {category}"
            );
        }
    }

    #[test]
    fn test_catalog_categories_match_prefix() {
        for parameter in default_catalog() {
            let category = Category::from_measure_id(&parameter.measure_id)
                .expect("catalog measure ids use known prefixes");
            assert_eq!(parameter.category_name(), category.name());
        }
    }

    #[test]
    fn test_sample_is_deterministic() {
        assert_eq!(sample_assessment(42), sample_assessment(42));
    }

    #[test]
    fn test_sample_measurements_in_range() {
        for seed in 0..20 {
            for parameter in sample_assessment(seed).parameters {
                assert!(parameter.denominator >= 1.0);
                assert!(parameter.denominator <= f64::from(SAMPLE_MAX_DENOMINATOR));
                assert!(parameter.numerator >= 0.0);
                assert!(parameter.numerator <= parameter.denominator);
            }
        }
    }
}
