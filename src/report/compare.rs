use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::scores::{DimensionScores, ProfileScore, ScoreSummary};

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonItem {
    pub id: String,
    pub dimensions: DimensionScores,
    pub profiles: BTreeMap<String, ProfileScore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub items: Vec<ComparisonItem>,
}

/// Merge several score documents into one comparison, sorted by the
/// web_hosting profile score descending (ties by id).
pub fn build_comparison(items: Vec<(String, ScoreSummary)>) -> Comparison {
    let mut items: Vec<ComparisonItem> = items
        .into_iter()
        .map(|(id, summary)| ComparisonItem {
            id,
            dimensions: summary.dimensions,
            profiles: summary.profiles,
        })
        .collect();
    items.sort_by(|a, b| {
        let sa = a.profiles.get("web_hosting").map(|p| p.score).unwrap_or(0.0);
        let sb = b.profiles.get("web_hosting").map(|p| p.score).unwrap_or(0.0);
        sb.partial_cmp(&sa)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    Comparison { items }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/compare.rs"]
mod tests;
