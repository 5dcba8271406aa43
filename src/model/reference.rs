use std::collections::BTreeMap;

/// Reference "best" targets per raw metric. A host hitting the target scores
/// 90 on that metric; scores between 90 and 100 live in the headroom window
/// above (or below, for lower-is-better metrics) the target.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    pub latency_ms: f64,
    pub jitter_ms: f64,
    pub packet_loss_pct: f64,
    pub bandwidth_mbps: f64,
    pub cpu_single: f64,
    pub cpu_per_core: f64,
    pub cpu_multi: f64,
    pub disk_write_mb_s: f64,
    pub disk_read_mb_s: f64,
    pub headroom: f64,
}

impl ReferenceTable {
    pub fn default_v1() -> Self {
        Self {
            latency_ms: 10.0,
            jitter_ms: 2.0,
            packet_loss_pct: 0.5,
            bandwidth_mbps: 1000.0,
            cpu_single: 3000.0,
            cpu_per_core: 2500.0,
            cpu_multi: 20000.0,
            disk_write_mb_s: 500.0,
            disk_read_mb_s: 500.0,
            headroom: 1.5,
        }
    }
}

/// Route quality has no continuous reference target, only threshold-based
/// quality loss. Heuristic constants, kept configurable.
#[derive(Debug, Clone)]
pub struct RouteThresholds {
    pub hop_limit: u32,
    pub hop_penalty: f64,
    pub rtt_limit_ms: f64,
    pub rtt_penalty: f64,
}

impl RouteThresholds {
    pub fn default_v1() -> Self {
        Self {
            hop_limit: 15,
            hop_penalty: 10.0,
            rtt_limit_ms: 200.0,
            rtt_penalty: 15.0,
        }
    }
}

/// Conservative substitutes used only when a metric is missing or its
/// measurement method is not trusted.
#[derive(Debug, Clone)]
pub struct FallbackDefaults {
    pub bandwidth_floor_mbps: f64,
    pub single_per_core: f64,
    pub multi_per_core: f64,
    pub trusted_sources: Vec<String>,
}

impl FallbackDefaults {
    pub fn default_v1() -> Self {
        Self {
            bandwidth_floor_mbps: 10.0,
            single_per_core: 2000.0,
            multi_per_core: 4000.0,
            trusted_sources: vec!["sysbench".to_string()],
        }
    }
}

/// Dimension-name -> weight mapping for one use-case profile. Weights need
/// not cover every dimension; a name absent from the dimension set simply
/// contributes 0.
pub type ProfileWeights = BTreeMap<String, f64>;

/// Immutable configuration injected into the scorer. Tests swap in alternate
/// tables without touching the algorithm.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub reference: ReferenceTable,
    pub route: RouteThresholds,
    pub fallback: FallbackDefaults,
    pub profiles: Vec<(String, ProfileWeights)>,
}

impl ScoringConfig {
    pub fn default_v1() -> Self {
        Self {
            reference: ReferenceTable::default_v1(),
            route: RouteThresholds::default_v1(),
            fallback: FallbackDefaults::default_v1(),
            profiles: vec![
                (
                    "web_hosting".to_string(),
                    weights(&[
                        ("latency", 0.25),
                        ("stability", 0.25),
                        ("disk", 0.20),
                        ("cpu", 0.15),
                        ("bandwidth", 0.15),
                    ]),
                ),
                (
                    "proxy".to_string(),
                    weights(&[
                        ("latency", 0.35),
                        ("bandwidth", 0.30),
                        ("stability", 0.20),
                        ("cpu", 0.10),
                        ("disk", 0.05),
                    ]),
                ),
                (
                    "compute".to_string(),
                    weights(&[
                        ("cpu", 0.40),
                        ("disk", 0.35),
                        ("stability", 0.15),
                        ("latency", 0.10),
                        ("bandwidth", 0.00),
                    ]),
                ),
            ],
        }
    }
}

pub fn weights(entries: &[(&str, f64)]) -> ProfileWeights {
    entries
        .iter()
        .map(|(name, w)| (name.to_string(), *w))
        .collect()
}
