use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::scores::ScoreSummary;

/// Profiles a leaderboard is generated for, in presentation order.
pub const PROFILE_KEYS: [&str; 3] = ["web_hosting", "proxy", "compute"];

#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub id: String,
    pub score: f64,
}

/// Per-profile leaderboards over many score documents, each sorted by score
/// descending. A document missing a profile ranks with score 0; ties break
/// by id so the output is stable.
pub fn build_rankings(
    items: &[(String, ScoreSummary)],
) -> BTreeMap<String, Vec<RankedEntry>> {
    let mut rankings = BTreeMap::new();
    for key in PROFILE_KEYS {
        let mut entries: Vec<RankedEntry> = items
            .iter()
            .map(|(id, summary)| RankedEntry {
                id: id.clone(),
                score: summary.profiles.get(key).map(|p| p.score).unwrap_or(0.0),
            })
            .collect();
        entries.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        rankings.insert(key.to_string(), entries);
    }
    rankings
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/rank.rs"]
mod tests;
