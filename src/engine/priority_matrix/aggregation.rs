// ==========================================
// Per-(mold, machine) metric aggregation from goodSample
// ==========================================

use crate::domain::sample::{PerformanceSample, FEATURE_NAMES};
use crate::stats::mean;
use std::collections::HashMap;

/// Mean of each of the four features across every good-group sample
/// sharing a (mold_id, machine_code) pair.
pub(super) fn aggregate_by_combination(good: &[PerformanceSample]) -> HashMap<(String, String), HashMap<&'static str, f64>> {
    let mut grouped: HashMap<(String, String), Vec<&PerformanceSample>> = HashMap::new();
    for sample in good {
        grouped
            .entry((sample.mold_id.clone(), sample.machine_code.clone()))
            .or_default()
            .push(sample);
    }

    grouped
        .into_iter()
        .map(|(key, samples)| {
            let metrics: HashMap<&'static str, f64> = FEATURE_NAMES
                .iter()
                .map(|&feature| {
                    let values: Vec<f64> = samples.iter().filter_map(|s| s.feature_value(feature)).collect();
                    (feature, mean(&values))
                })
                .collect();
            (key, metrics)
        })
        .collect()
}
