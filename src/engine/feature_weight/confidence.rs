// ==========================================
// Per-feature confidence scoring
// ==========================================

use super::bootstrap;
use crate::domain::types::FeatureTarget;
use crate::stats::{interval_separation, mann_whitney_u, mean};

const EPS: f64 = 1e-9;

pub(super) struct FeatureConfidence {
    pub statistical_significance: f64,
    pub target_achievement_good: f64,
    pub target_achievement_bad: f64,
    pub separation_confidence: f64,
    pub good_confidence: f64,
    pub bad_confidence: f64,
    pub degraded: bool,
}

fn ideal_value(target: &FeatureTarget) -> f64 {
    match target {
        FeatureTarget::Minimize => 0.0,
        FeatureTarget::Value(v) => *v,
    }
}

/// `max(0, 1 - mean/maxObserved)` for a minimize target, or
/// `max(0, 1 - |mean - target| / max(target, eps))` for a numeric target.
fn target_achievement(group_mean: f64, target: &FeatureTarget, max_observed: f64) -> f64 {
    let raw = match target {
        FeatureTarget::Minimize => 1.0 - group_mean / max_observed.max(EPS),
        FeatureTarget::Value(v) => 1.0 - (group_mean - v).abs() / v.max(EPS),
    };
    raw.clamp(0.0, 1.0)
}

/// How tightly a group's observations cluster around the ideal value for
/// this feature, relative to the combined observed range. A proxy for "is
/// this group's behavior close to the textbook target", independent of the
/// target-normalized `target_achievement` score above.
fn distance_from_ideal(group_mean: f64, target: &FeatureTarget, combined_range: f64) -> f64 {
    let ideal = ideal_value(target);
    (1.0 - (group_mean - ideal).abs() / combined_range.max(EPS)).clamp(0.0, 1.0)
}

/// Computes the full confidence bundle for one feature. `good`/`bad` are the
/// raw observed values for that feature; `rng` must already be seeded per
/// [`bootstrap::feature_rng`].
pub(super) fn compute_confidence(
    good: &[f64],
    bad: &[f64],
    target: &FeatureTarget,
    n_bootstrap: usize,
    confidence_level: f64,
    min_sample_size: usize,
    rng: &mut rand_chacha::ChaCha8Rng,
) -> FeatureConfidence {
    if good.len() < min_sample_size || bad.len() < min_sample_size {
        return FeatureConfidence {
            statistical_significance: 0.0,
            target_achievement_good: 0.0,
            target_achievement_bad: 0.0,
            separation_confidence: 0.0,
            good_confidence: 0.5,
            bad_confidence: 0.5,
            degraded: true,
        };
    }

    let ci_good = bootstrap::bootstrap_ci(good, n_bootstrap, confidence_level, rng);
    let ci_bad = bootstrap::bootstrap_ci(bad, n_bootstrap, confidence_level, rng);
    let separation_confidence = interval_separation(ci_good, ci_bad);

    let (_, p_value) = mann_whitney_u(good, bad);
    let statistical_significance = (1.0 - p_value).clamp(0.0, 1.0);

    let combined: Vec<f64> = good.iter().chain(bad.iter()).copied().collect();
    let max_observed = combined.iter().cloned().fold(f64::MIN, f64::max).max(EPS);
    let combined_range = {
        let hi = combined.iter().cloned().fold(f64::MIN, f64::max);
        let lo = combined.iter().cloned().fold(f64::MAX, f64::min);
        (hi - lo).max(EPS)
    };

    let good_mean = mean(good);
    let bad_mean = mean(bad);

    let target_achievement_good = target_achievement(good_mean, target, max_observed);
    let target_achievement_bad = target_achievement(bad_mean, target, max_observed);
    let distance_good = distance_from_ideal(good_mean, target, combined_range);
    let distance_bad = distance_from_ideal(bad_mean, target, combined_range);

    let good_confidence = (0.4 * target_achievement_good
        + 0.3 * separation_confidence
        + 0.2 * statistical_significance
        + 0.1 * distance_good)
        .clamp(0.0, 1.0);
    let bad_confidence = (0.4 * (1.0 - target_achievement_bad)
        + 0.3 * separation_confidence
        + 0.2 * statistical_significance
        + 0.1 * (1.0 - distance_bad))
        .clamp(0.0, 1.0);

    FeatureConfidence {
        statistical_significance,
        target_achievement_good,
        target_achievement_bad,
        separation_confidence,
        good_confidence,
        bad_confidence,
        degraded: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_separated_samples_yield_high_separation_confidence() {
        let good: Vec<f64> = (0..50).map(|i| 0.01 + i as f64 * 0.0001).collect();
        let bad: Vec<f64> = (0..50).map(|i| 0.08 + i as f64 * 0.0001).collect();
        let mut rng = bootstrap::feature_rng(42, "shiftNGRate");
        let target = FeatureTarget::Minimize;
        let result = compute_confidence(&good, &bad, &target, 500, 0.95, 10, &mut rng);
        assert!(!result.degraded);
        assert!(result.separation_confidence > 0.9, "got {}", result.separation_confidence);
    }

    #[test]
    fn undersized_samples_are_degraded() {
        let good = vec![0.01, 0.02, 0.03];
        let bad: Vec<f64> = (0..20).map(|i| 0.08 + i as f64 * 0.001).collect();
        let mut rng = bootstrap::feature_rng(42, "shiftNGRate");
        let target = FeatureTarget::Minimize;
        let result = compute_confidence(&good, &bad, &target, 500, 0.95, 10, &mut rng);
        assert!(result.degraded);
        assert_eq!(result.good_confidence, 0.5);
        assert_eq!(result.bad_confidence, 0.5);
        assert_eq!(result.separation_confidence, 0.0);
    }
}
