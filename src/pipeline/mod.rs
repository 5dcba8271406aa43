pub mod stage1_fallback;
pub mod stage2_normalize;
pub mod stage3_dimensions;
pub mod stage4_profiles;

use chrono::{SecondsFormat, Utc};

use crate::model::measurement::RawMeasurement;
use crate::model::reference::ScoringConfig;
use crate::model::scores::{
    CpuInfo, DiskInfo, FallbackEcho, SCORE_MODEL, ScoreDocument, ScoreMeta,
};
use crate::pipeline::stage1_fallback::{CpuResolved, resolve_bandwidth, resolve_cpu};
use crate::pipeline::stage3_dimensions::{Stage3Inputs, run_stage3};
use crate::pipeline::stage4_profiles::run_stage4;

/// Single-pass transformation of one raw measurement into a score document.
/// Deterministic apart from the generation timestamp in `meta`.
pub fn compute_scores(raw: &RawMeasurement, config: &ScoringConfig) -> ScoreDocument {
    let cpu = resolve_cpu(&raw.system.cpu, &config.fallback);
    let (bandwidth_mbps, bandwidth_floor) =
        resolve_bandwidth(raw.network.bandwidth_mbps, &config.fallback);

    let dimensions = run_stage3(&Stage3Inputs {
        raw,
        cpu: &cpu,
        bandwidth_mbps,
        reference: &config.reference,
        route: &config.route,
    });
    let profiles = run_stage4(&dimensions, &config.profiles);

    ScoreDocument {
        dimensions,
        profiles,
        meta: build_meta(raw, &cpu, bandwidth_floor),
    }
}

fn build_meta(raw: &RawMeasurement, cpu: &CpuResolved, bandwidth_floor: bool) -> ScoreMeta {
    ScoreMeta {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        model: SCORE_MODEL.to_string(),
        cpu_info: CpuInfo {
            model: raw.system.cpu.model.clone(),
            cores: raw.system.cpu.cores,
            bench_single: cpu.bench_single,
            bench_multi: cpu.bench_multi,
            per_core: cpu.per_core,
            source: cpu.source.clone(),
        },
        disk_info: DiskInfo {
            write_mb_s: raw.system.disk.write_mb_s,
            read_mb_s: raw.system.disk.read_mb_s,
        },
        fallbacks: FallbackEcho {
            bandwidth_floor,
            cpu_estimated: cpu.estimated,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
