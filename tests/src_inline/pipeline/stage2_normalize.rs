use super::*;

const H: f64 = 1.5;

#[test]
fn test_absent_zero_negative_values_score_zero() {
    assert_eq!(normalize(None, 10.0, true, H), 0.0);
    assert_eq!(normalize(Some(0.0), 10.0, true, H), 0.0);
    assert_eq!(normalize(Some(-1.0), 10.0, true, H), 0.0);
    assert_eq!(normalize(None, 10.0, false, H), 0.0);
}

#[test]
fn test_degenerate_reference_scores_zero() {
    assert_eq!(normalize(Some(5.0), 0.0, true, H), 0.0);
    assert_eq!(normalize(Some(5.0), -10.0, false, H), 0.0);
    assert_eq!(normalize(Some(5.0), 10.0, true, 1.0), 0.0);
}

#[test]
fn test_higher_is_better_fixed_points() {
    let best = 1000.0;
    assert_eq!(normalize(Some(best), best, true, H), 90.0);
    assert_eq!(normalize(Some(best * 1.5), best, true, H), 100.0);
    assert_eq!(normalize(Some(best * 4.0), best, true, H), 100.0);
    assert_eq!(normalize(Some(best / 2.0), best, true, H), 45.0);
}

#[test]
fn test_lower_is_better_fixed_points() {
    let best = 10.0;
    assert_eq!(normalize(Some(best), best, false, H), 90.0);
    assert_eq!(normalize(Some(best / 1.5), best, false, H), 100.0);
    assert_eq!(normalize(Some(best / 10.0), best, false, H), 100.0);
    assert_eq!(normalize(Some(best * 2.0), best, false, H), 45.0);
}

#[test]
fn test_headroom_window_interpolates_between_90_and_100() {
    // Halfway into the window above the target.
    let score = normalize(Some(1250.0), 1000.0, true, H);
    assert!((score - 95.0).abs() < 1e-9);

    // Halfway into the window below a lower-is-better target:
    // best 10, floor 10/1.5, midpoint of [floor, best].
    let floor = 10.0 / 1.5;
    let mid = (10.0 + floor) / 2.0;
    let score = normalize(Some(mid), 10.0, false, H);
    assert!((score - 95.0).abs() < 1e-9);
}

#[test]
fn test_monotone_nondecreasing_in_value_when_higher_is_better() {
    let best = 500.0;
    let mut prev = 0.0;
    for step in 1..=2000 {
        let v = step as f64;
        let score = normalize(Some(v), best, true, H);
        assert!(
            score >= prev - 1e-12,
            "score decreased at v={v}: {prev} -> {score}"
        );
        assert!((0.0..=100.0).contains(&score));
        prev = score;
    }
    assert_eq!(prev, 100.0);
}

#[test]
fn test_monotone_nonincreasing_in_value_when_lower_is_better() {
    let best = 10.0;
    let mut prev = 100.0;
    for step in 1..=1000 {
        let v = step as f64 * 0.1;
        let score = normalize(Some(v), best, false, H);
        assert!(
            score <= prev + 1e-12,
            "score increased at v={v}: {prev} -> {score}"
        );
        assert!((0.0..=100.0).contains(&score));
        prev = score;
    }
}

#[test]
fn test_custom_headroom_moves_the_saturation_point() {
    let best = 100.0;
    assert!(normalize(Some(190.0), best, true, 2.0) < 100.0);
    assert_eq!(normalize(Some(200.0), best, true, 2.0), 100.0);
}
