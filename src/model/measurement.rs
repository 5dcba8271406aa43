use serde::Deserialize;

/// One raw benchmark document as collected on the host.
///
/// Every leaf field is optional: an absent or null value means the metric was
/// never measured, and the pipeline degrades it to a zero contribution or a
/// documented fallback instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMeasurement {
    pub network: NetworkSection,
    pub system: SystemSection,
    pub route: RouteSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NetworkSection {
    pub latency_ms: Option<f64>,
    pub jitter_ms: Option<f64>,
    pub packet_loss_pct: Option<f64>,
    pub bandwidth_mbps: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SystemSection {
    pub cpu: CpuSection,
    pub disk: DiskSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CpuSection {
    /// Informational only; echoed into the score document meta.
    pub model: Option<String>,
    pub cores: Option<u32>,
    pub bench_single: Option<f64>,
    pub bench_multi: Option<f64>,
    /// Tag identifying the measurement method, e.g. "sysbench". Absent or
    /// unrecognized tags demote the bench values to untrusted.
    pub bench_source: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DiskSection {
    #[serde(rename = "write_MB_s")]
    pub write_mb_s: Option<f64>,
    #[serde(rename = "read_MB_s")]
    pub read_mb_s: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RouteSection {
    pub hop_count: Option<u32>,
    pub max_rtt_ms: Option<f64>,
}
