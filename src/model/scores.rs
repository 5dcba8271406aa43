use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::reference::ProfileWeights;

/// Version tag of the scoring formula generation, stamped into every score
/// document so downstream consumers can tell formula revisions apart.
pub const SCORE_MODEL: &str = "v0.5";

/// The six normalized 0-100 axes describing one host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionScores {
    pub latency: f64,
    pub stability: f64,
    pub bandwidth: f64,
    pub cpu: f64,
    pub disk: f64,
    pub route: f64,
}

impl DimensionScores {
    /// Name-based lookup used by the profile scorer. Unknown names resolve
    /// to 0 so a weight table can never make scoring fail.
    pub fn get(&self, name: &str) -> f64 {
        match name {
            "latency" => self.latency,
            "stability" => self.stability,
            "bandwidth" => self.bandwidth,
            "cpu" => self.cpu,
            "disk" => self.disk,
            "route" => self.route,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileScore {
    pub score: f64,
    /// Weight vector the score was computed with, retained for audit.
    pub weights: ProfileWeights,
}

/// The scorecard written to durable storage; the sole artifact of a run.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreDocument {
    pub dimensions: DimensionScores,
    pub profiles: BTreeMap<String, ProfileScore>,
    pub meta: ScoreMeta,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreMeta {
    pub generated_at: String,
    pub model: String,
    pub cpu_info: CpuInfo,
    pub disk_info: DiskInfo,
    pub fallbacks: FallbackEcho,
}

/// Echo of the CPU inputs the cpu dimension was actually computed from.
#[derive(Debug, Clone, Serialize)]
pub struct CpuInfo {
    pub model: Option<String>,
    pub cores: Option<u32>,
    pub bench_single: f64,
    pub bench_multi: f64,
    pub per_core: f64,
    pub source: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiskInfo {
    #[serde(rename = "write_MB_s")]
    pub write_mb_s: Option<f64>,
    #[serde(rename = "read_MB_s")]
    pub read_mb_s: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FallbackEcho {
    pub bandwidth_floor: bool,
    pub cpu_estimated: bool,
}

/// Lenient reader view of a score document, used by rank/compare. Anything
/// missing falls back to defaults instead of failing the scan.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoreSummary {
    pub dimensions: DimensionScores,
    pub profiles: BTreeMap<String, ProfileScore>,
}

pub fn clamp100(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 100.0 {
        100.0
    } else {
        x
    }
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
