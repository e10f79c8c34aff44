// ==========================================
// Traditional / enhanced weight computation
// ==========================================

use crate::domain::types::{FeatureTarget, Scaling};

const EPS: f64 = 1e-9;

/// `|mean(goodSample) - target|` for a numeric target, or `mean(goodSample)`
/// for a minimize target.
pub(super) fn feature_deviation(good_mean: f64, target: &FeatureTarget) -> f64 {
    match target {
        FeatureTarget::Minimize => good_mean.abs(),
        FeatureTarget::Value(v) => (good_mean - v).abs(),
    }
}

/// Un-normalized traditional weight for one feature, before the
/// sum-to-one renormalization across all features.
pub(super) fn raw_traditional_weight(deviation: f64, target: &FeatureTarget, scaling: Scaling) -> f64 {
    match scaling {
        Scaling::Absolute => deviation,
        Scaling::Relative => {
            let denom = match target {
                FeatureTarget::Minimize => EPS,
                FeatureTarget::Value(v) => v.max(EPS),
            };
            deviation / denom
        }
    }
}

/// Normalizes a vector of non-negative raw weights to sum to 1. All-zero
/// input is spread uniformly rather than left as NaN.
pub(super) fn normalize(raw: &[f64]) -> Vec<f64> {
    let sum: f64 = raw.iter().sum();
    if sum <= EPS {
        let n = raw.len().max(1) as f64;
        return vec![1.0 / n; raw.len()];
    }
    raw.iter().map(|w| w / sum).collect()
}

/// `enhancedWeight(f) = traditionalWeight(f) * (1 + separationConfidence(f) * confidenceWeight)`.
pub(super) fn enhanced_weight(traditional_weight: f64, separation_confidence: f64, confidence_weight: f64) -> f64 {
    traditional_weight * (1.0 + separation_confidence * confidence_weight)
}
