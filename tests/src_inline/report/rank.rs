use super::*;

use crate::model::reference::weights;

fn summary_with(profile: &str, score: f64) -> ScoreSummary {
    let mut summary = ScoreSummary::default();
    summary.profiles.insert(
        profile.to_string(),
        crate::model::scores::ProfileScore {
            score,
            weights: weights(&[]),
        },
    );
    summary
}

#[test]
fn test_rankings_sort_descending_per_profile() {
    let items = vec![
        ("vps-a".to_string(), summary_with("web_hosting", 61.2)),
        ("vps-b".to_string(), summary_with("web_hosting", 88.9)),
        ("vps-c".to_string(), summary_with("web_hosting", 74.0)),
    ];
    let rankings = build_rankings(&items);
    let ids: Vec<&str> = rankings["web_hosting"].iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["vps-b", "vps-c", "vps-a"]);
}

#[test]
fn test_every_profile_gets_a_leaderboard() {
    let items = vec![("vps-a".to_string(), summary_with("proxy", 50.0))];
    let rankings = build_rankings(&items);
    for key in PROFILE_KEYS {
        assert_eq!(rankings[key].len(), 1, "missing leaderboard for {key}");
    }
}

#[test]
fn test_document_missing_a_profile_ranks_with_zero() {
    let items = vec![
        ("vps-a".to_string(), summary_with("web_hosting", 70.0)),
        ("vps-b".to_string(), ScoreSummary::default()),
    ];
    let rankings = build_rankings(&items);
    let board = &rankings["web_hosting"];
    assert_eq!(board[1].id, "vps-b");
    assert_eq!(board[1].score, 0.0);
}

#[test]
fn test_equal_scores_tie_break_by_id() {
    let items = vec![
        ("vps-z".to_string(), summary_with("compute", 55.0)),
        ("vps-a".to_string(), summary_with("compute", 55.0)),
    ];
    let rankings = build_rankings(&items);
    let ids: Vec<&str> = rankings["compute"].iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["vps-a", "vps-z"]);
}
