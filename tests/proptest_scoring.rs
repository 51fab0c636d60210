//! Property-based tests for the scoring engine.
//!
//! Checks that scoring invariants hold across random parameter sets,
//! including unknown targets and zero denominators.

use csf_index::model::Parameter;
use csf_index::scoring::{compute_index, score, total_score, weighted_score, MaturityTable};
use proptest::prelude::*;

fn target_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => prop::sample::select(vec![0.0, 50.0, 100.0]),
        1 => 0.0..150.0f64,
    ]
}

fn parameter_strategy() -> impl Strategy<Value = Parameter> {
    (
        1u32..500,
        0.0..1_000.0f64,
        prop_oneof![1 => Just(0.0), 5 => 1.0..1_000.0f64],
        target_strategy(),
        0.0..20.0f64,
    )
        .prop_map(|(id, numerator, denominator, target, weightage)| {
            Parameter::new(id, "ID.AM.S1", format!("Control {id}"), target, weightage)
                .with_measurement(numerator, denominator)
        })
}

/// Parameter sets with a distinct measure id per entry.
fn parameters_strategy(max_len: usize) -> impl Strategy<Value = Vec<Parameter>> {
    prop::collection::vec(parameter_strategy(), 0..max_len).prop_map(|parameters| {
        parameters
            .into_iter()
            .enumerate()
            .map(|(i, mut parameter)| {
                parameter.measure_id = format!("ID.AM.S{}", i + 1);
                parameter
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn score_is_bounded(parameter in parameter_strategy()) {
        let s = score(&parameter);
        prop_assert!((0.0..=100.0).contains(&s), "score {} out of range", s);
    }

    #[test]
    fn weighted_score_scales_by_weightage(parameter in parameter_strategy()) {
        let expected = score(&parameter) * parameter.weightage / 100.0;
        prop_assert!((weighted_score(&parameter) - expected).abs() < 1e-9);
    }

    #[test]
    fn total_is_sum_of_weighted_scores(parameters in prop::collection::vec(parameter_strategy(), 0..30)) {
        let result = compute_index(&parameters);
        let sum: f64 = parameters.iter().map(weighted_score).sum();
        prop_assert!((result.total_score - sum).abs() < 1e-9);
        prop_assert!((total_score(&parameters) - sum).abs() < 1e-9);
    }

    #[test]
    fn improvement_areas_are_ranked_and_limited(parameters in parameters_strategy(30)) {
        let result = compute_index(&parameters);
        prop_assert!(result.improvement_areas.len() <= 4);
        for pair in result.improvement_areas.windows(2) {
            prop_assert!(pair[0].impact >= pair[1].impact);
        }
        for area in &result.improvement_areas {
            let parameter = parameters
                .iter()
                .find(|p| p.measure_id == area.measure_id)
                .expect("suggested parameter exists");
            prop_assert!(
                area.current_score < parameter.target,
                "{} scores {} against target {}",
                area.measure_id,
                area.current_score,
                parameter.target
            );
            prop_assert!(area.impact >= 0.0);
        }
    }

    #[test]
    fn evaluation_is_idempotent(parameters in prop::collection::vec(parameter_strategy(), 0..30)) {
        prop_assert_eq!(compute_index(&parameters), compute_index(&parameters));
    }

    #[test]
    fn maturity_is_monotonic(a in 0.0..=100.0f64, b in 0.0..=100.0f64) {
        let table = MaturityTable::standard();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(table.lookup(low).level <= table.lookup(high).level);
    }

    #[test]
    fn category_weightages_cover_all_parameters(parameters in prop::collection::vec(parameter_strategy(), 1..30)) {
        let result = compute_index(&parameters);
        let counted: usize = result.category_scores.iter().map(|c| c.parameter_count).sum();
        prop_assert_eq!(counted, parameters.len());
        for category in &result.category_scores {
            prop_assert!((0.0..=100.0 + 1e-9).contains(&category.score));
        }
    }
}
