use super::*;

use crate::model::reference::{ScoringConfig, weights};

fn sample_dimensions() -> DimensionScores {
    DimensionScores {
        latency: 90.0,
        stability: 80.0,
        bandwidth: 70.0,
        cpu: 60.0,
        disk: 50.0,
        route: 100.0,
    }
}

#[test]
fn test_default_profiles_weighted_sums() {
    let profiles = run_stage4(&sample_dimensions(), &ScoringConfig::default_v1().profiles);
    assert_eq!(profiles["web_hosting"].score, 72.0);
    assert_eq!(profiles["proxy"].score, 77.0);
    assert_eq!(profiles["compute"].score, 62.5);
}

#[test]
fn test_weight_vector_is_retained_per_profile() {
    let profiles = run_stage4(&sample_dimensions(), &ScoringConfig::default_v1().profiles);
    assert_eq!(profiles["web_hosting"].weights["latency"], 0.25);
    assert_eq!(profiles["compute"].weights["bandwidth"], 0.0);
}

#[test]
fn test_weights_apply_per_document_not_hard_coded() {
    let dims = sample_dimensions();
    let latency_heavy = vec![(
        "web_hosting".to_string(),
        weights(&[("latency", 0.8), ("disk", 0.2)]),
    )];
    let disk_heavy = vec![(
        "web_hosting".to_string(),
        weights(&[("latency", 0.2), ("disk", 0.8)]),
    )];
    let a = run_stage4(&dims, &latency_heavy);
    let b = run_stage4(&dims, &disk_heavy);
    assert_eq!(a["web_hosting"].score, 82.0);
    assert_eq!(b["web_hosting"].score, 58.0);
    assert_ne!(a["web_hosting"].score, b["web_hosting"].score);
}

#[test]
fn test_unknown_dimension_name_contributes_zero() {
    let table = vec![(
        "experimental".to_string(),
        weights(&[("latency", 0.5), ("gpu", 0.5)]),
    )];
    let profiles = run_stage4(&sample_dimensions(), &table);
    assert_eq!(profiles["experimental"].score, 45.0);
}

#[test]
fn test_scores_round_to_two_decimals() {
    let dims = DimensionScores {
        latency: 33.333333,
        ..Default::default()
    };
    let table = vec![("p".to_string(), weights(&[("latency", 1.0)]))];
    let profiles = run_stage4(&dims, &table);
    assert_eq!(profiles["p"].score, 33.33);
}

#[test]
fn test_empty_weight_table_yields_zero_score() {
    let table = vec![("empty".to_string(), weights(&[]))];
    let profiles = run_stage4(&sample_dimensions(), &table);
    assert_eq!(profiles["empty"].score, 0.0);
}

#[test]
fn test_profile_scoring_is_bit_identical_across_calls() {
    let dims = sample_dimensions();
    let config = ScoringConfig::default_v1();
    let a = run_stage4(&dims, &config.profiles);
    let b = run_stage4(&dims, &config.profiles);
    for (name, score) in &a {
        assert_eq!(score.score.to_bits(), b[name].score.to_bits());
    }
}
