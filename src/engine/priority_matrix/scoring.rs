// ==========================================
// Weighted score and dense rank assignment
// ==========================================

use crate::domain::sample::FEATURE_NAMES;
use std::collections::HashMap;

/// `score = Σ weight(f) · metric(f)`, with shiftNGRate entering as
/// `(1 - shiftNGRate)` so higher is always better. Summed in the fixed
/// `FEATURE_NAMES` order rather than `metrics`' own hash order, since
/// floating-point addition is not associative and a `HashMap`'s iteration
/// order is randomized per process.
pub(super) fn weighted_score(metrics: &HashMap<&'static str, f64>, weights: &HashMap<String, f64>) -> f64 {
    FEATURE_NAMES
        .iter()
        .map(|&feature| {
            let Some(&value) = metrics.get(feature) else {
                return 0.0;
            };
            let w = weights.get(feature).copied().unwrap_or(0.0);
            let v = if feature == "shiftNGRate" { 1.0 - value } else { value };
            w * v
        })
        .sum()
}

/// Dense ranks (1..=k) over `(machine_code, score)` pairs: descending score,
/// ties broken by ascending machine_code.
pub(super) fn dense_ranks(mut entries: Vec<(String, f64)>) -> Vec<(String, u32)> {
    entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (machine_code, _))| (machine_code, (i + 1) as u32))
        .collect()
}
