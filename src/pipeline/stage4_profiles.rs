use std::collections::BTreeMap;

use crate::model::reference::ProfileWeights;
use crate::model::scores::{DimensionScores, ProfileScore, round2};

/// Compute the weighted per-use-case scores over the six dimensions.
///
/// Profiles are independent and never fail: a weight naming an unknown
/// dimension contributes 0 through the default lookup. The weight vector is
/// retained next to each score so a document is reproducible on its own.
pub fn run_stage4(
    dimensions: &DimensionScores,
    profiles: &[(String, ProfileWeights)],
) -> BTreeMap<String, ProfileScore> {
    let mut out = BTreeMap::new();
    for (name, weights) in profiles {
        let mut total = 0.0;
        for (dim, w) in weights {
            total += dimensions.get(dim) * w;
        }
        out.insert(
            name.clone(),
            ProfileScore {
                score: round2(total),
                weights: weights.clone(),
            },
        );
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_profiles.rs"]
mod tests;
