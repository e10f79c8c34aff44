// ==========================================
// Cavity / cycle stability index formulas
// ==========================================

use crate::stats::{coefficient_of_variation, mean};

fn data_completeness(total_records: i64, threshold: i64) -> f64 {
    if threshold <= 0 {
        return 1.0;
    }
    (total_records as f64 / threshold as f64).min(1.0)
}

/// Weighted sum: accuracy 0.40, consistency 0.30, utilization 0.20,
/// completeness 0.10.
pub(super) fn cavity_stability_index(
    cavities: &[i32],
    cavity_standard: i32,
    total_records: i64,
    threshold: i64,
) -> f64 {
    if cavities.is_empty() {
        return 0.0;
    }
    let n = cavities.len() as f64;
    let matches = cavities.iter().filter(|&&c| c == cavity_standard).count() as f64;
    let accuracy_rate = matches / n;

    let cavities_f: Vec<f64> = cavities.iter().map(|&c| c as f64).collect();
    let consistency_score = (1.0 - coefficient_of_variation(&cavities_f)).max(0.0);

    let utilization_rate = if cavity_standard > 0 {
        (mean(&cavities_f) / cavity_standard as f64).min(1.0)
    } else {
        0.0
    };

    let completeness = data_completeness(total_records, threshold);

    0.40 * accuracy_rate + 0.30 * consistency_score + 0.20 * utilization_rate + 0.10 * completeness
}

/// Weighted sum: accuracy 0.30, consistency 0.25, range compliance 0.25,
/// outlier penalty 0.10, completeness 0.10.
pub(super) fn cycle_stability_index(
    cycles: &[f64],
    setting_cycle: f64,
    total_records: i64,
    threshold: i64,
) -> f64 {
    if cycles.is_empty() || setting_cycle <= 0.0 {
        return 0.0;
    }
    let n = cycles.len() as f64;

    let rel_devs: Vec<f64> = cycles
        .iter()
        .map(|&c| (c - setting_cycle).abs() / setting_cycle)
        .collect();

    let accuracy_score = (1.0 - mean(&rel_devs)).max(0.0);
    let consistency_score = (1.0 - coefficient_of_variation(cycles)).max(0.0);

    let within_range = rel_devs.iter().filter(|&&d| d <= 0.20).count() as f64;
    let range_compliance = within_range / n;

    let outliers = rel_devs.iter().filter(|&&d| d > 1.0).count() as f64;
    let outlier_penalty = (1.0 - outliers / n).max(0.0);

    let completeness = data_completeness(total_records, threshold);

    0.30 * accuracy_score
        + 0.25 * consistency_score
        + 0.25 * range_compliance
        + 0.10 * outlier_penalty
        + 0.10 * completeness
}
