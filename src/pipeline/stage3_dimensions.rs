use crate::model::measurement::{RawMeasurement, RouteSection};
use crate::model::reference::{ReferenceTable, RouteThresholds};
use crate::model::scores::{DimensionScores, clamp100};
use crate::pipeline::stage1_fallback::CpuResolved;
use crate::pipeline::stage2_normalize::normalize;

#[derive(Debug, Clone)]
pub struct Stage3Inputs<'a> {
    pub raw: &'a RawMeasurement,
    pub cpu: &'a CpuResolved,
    /// Bandwidth after fallback resolution, Mbps.
    pub bandwidth_mbps: f64,
    pub reference: &'a ReferenceTable,
    pub route: &'a RouteThresholds,
}

/// Blend the normalized sub-metrics into the six named dimensions.
pub fn run_stage3(inputs: &Stage3Inputs<'_>) -> DimensionScores {
    let r = inputs.reference;
    let h = r.headroom;
    let net = &inputs.raw.network;
    let disk = &inputs.raw.system.disk;
    let cpu = inputs.cpu;

    let jitter = normalize(net.jitter_ms, r.jitter_ms, false, h);
    let loss = normalize(net.packet_loss_pct, r.packet_loss_pct, false, h);
    // Jitter weighted higher: it predicts connection quality for persistent
    // sessions better than raw loss.
    let stability = 0.6 * jitter + 0.4 * loss;

    let single = normalize(Some(cpu.bench_single), r.cpu_single, true, h);
    let per_core = normalize(Some(cpu.per_core), r.cpu_per_core, true, h);
    let multi = normalize(Some(cpu.bench_multi), r.cpu_multi, true, h);
    let cpu_score = 0.5 * single + 0.3 * per_core + 0.2 * multi;

    let write = normalize(disk.write_mb_s, r.disk_write_mb_s, true, h);
    let read = normalize(disk.read_mb_s, r.disk_read_mb_s, true, h);
    let disk_score = 0.8 * write + 0.2 * read;

    DimensionScores {
        latency: normalize(net.latency_ms, r.latency_ms, false, h),
        stability: clamp100(stability),
        bandwidth: normalize(Some(inputs.bandwidth_mbps), r.bandwidth_mbps, true, h),
        cpu: clamp100(cpu_score),
        disk: clamp100(disk_score),
        route: route_score(&inputs.raw.route, inputs.route),
    }
}

/// Route quality as a penalty score: no continuous reference target exists,
/// only threshold-based quality loss.
pub fn route_score(route: &RouteSection, thresholds: &RouteThresholds) -> f64 {
    let hops = route.hop_count.unwrap_or(0);
    let max_rtt = route.max_rtt_ms.unwrap_or(0.0);
    let mut penalty = 0.0;
    if hops > thresholds.hop_limit {
        penalty += thresholds.hop_penalty;
    }
    if max_rtt > thresholds.rtt_limit_ms {
        penalty += thresholds.rtt_penalty;
    }
    (100.0 - penalty).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_dimensions.rs"]
mod tests;
