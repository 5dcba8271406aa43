use crate::model::measurement::CpuSection;
use crate::model::reference::FallbackDefaults;

/// CPU bench values after fallback resolution, ready for normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuResolved {
    pub bench_single: f64,
    pub bench_multi: f64,
    pub per_core: f64,
    pub estimated: bool,
    /// Origin label echoed into the score document meta: the trusted tag
    /// itself, "estimated", "measured" (or the raw untrusted tag), or
    /// "unavailable".
    pub source: String,
}

/// Substitute a low non-zero floor for absent or non-positive bandwidth so a
/// single missing sample does not zero out an otherwise-good host. Returns
/// the usable value and whether the floor was applied.
pub fn resolve_bandwidth(raw: Option<f64>, defaults: &FallbackDefaults) -> (f64, bool) {
    match raw {
        Some(v) if v > 0.0 => (v, false),
        _ => (defaults.bandwidth_floor_mbps, true),
    }
}

/// Produce usable CPU bench values even when direct measurement is missing
/// or distrusted.
///
/// A trusted `bench_source` means the instrument is believed as-is, zero or
/// low values included. Without a trusted source, positive measured values
/// are still used, and only missing/non-positive fields are estimated from
/// the core count as a deliberately conservative substitute.
pub fn resolve_cpu(cpu: &CpuSection, defaults: &FallbackDefaults) -> CpuResolved {
    let trusted = cpu
        .bench_source
        .as_deref()
        .map(|tag| defaults.trusted_sources.iter().any(|t| t == tag))
        .unwrap_or(false);

    let cores = cpu.cores.unwrap_or(0);
    let mut estimated = false;

    let (bench_single, bench_multi) = if trusted {
        (
            cpu.bench_single.unwrap_or(0.0),
            cpu.bench_multi.unwrap_or(0.0),
        )
    } else {
        let single = match cpu.bench_single {
            Some(v) if v > 0.0 => v,
            _ if cores > 0 => {
                estimated = true;
                cores as f64 * defaults.single_per_core
            }
            _ => 0.0,
        };
        let multi = match cpu.bench_multi {
            Some(v) if v > 0.0 => v,
            _ if cores > 0 => {
                estimated = true;
                cores as f64 * defaults.multi_per_core
            }
            _ => 0.0,
        };
        (single, multi)
    };

    let per_core = if cores > 0 {
        bench_multi / cores as f64
    } else {
        bench_multi
    };

    let source = if trusted {
        cpu.bench_source.clone().unwrap_or_default()
    } else if estimated {
        "estimated".to_string()
    } else if bench_single > 0.0 || bench_multi > 0.0 {
        cpu.bench_source
            .clone()
            .unwrap_or_else(|| "measured".to_string())
    } else {
        "unavailable".to_string()
    };

    CpuResolved {
        bench_single,
        bench_multi,
        per_core,
        estimated,
        source,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_fallback.rs"]
mod tests;
