/// Map one raw metric against its reference target to a 0-100 score.
///
/// Hitting the target exactly scores 90; the last ten points are a headroom
/// window (`best*headroom` for higher-is-better metrics, `best/headroom` for
/// lower-is-better ones) so that merely reaching the reference does not
/// saturate the scale and exceptional hosts stay distinguishable.
///
/// Absent, zero, or negative values, a non-positive `best`, and a degenerate
/// `headroom <= 1` all score 0: an unmeasured or misconfigured metric
/// contributes nothing rather than erroring.
pub fn normalize(value: Option<f64>, best: f64, higher_is_better: bool, headroom: f64) -> f64 {
    let Some(v) = value else {
        return 0.0;
    };
    if v <= 0.0 || best <= 0.0 || headroom <= 1.0 {
        return 0.0;
    }

    if higher_is_better {
        if v <= best {
            return (v / best * 90.0).min(90.0);
        }
        let ceiling = best * headroom;
        if v >= ceiling {
            return 100.0;
        }
        90.0 + 10.0 * (v - best) / (ceiling - best)
    } else {
        if v >= best {
            return (best / v).min(1.0) * 90.0;
        }
        let floor = best / headroom;
        if v <= floor {
            return 100.0;
        }
        90.0 + 10.0 * (best - v) / (best - floor)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
