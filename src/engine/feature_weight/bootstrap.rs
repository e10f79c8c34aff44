// ==========================================
// Seeded bootstrap resampling
// ==========================================

use crate::stats::percentile_interval;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// FNV-1a (64-bit) over a feature name, used to derive a per-feature seed
/// from the configured base seed so bootstrap results never depend on
/// evaluation order (sequential or bounded-parallel).
pub(super) fn fnv1a(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for b in s.bytes() {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

pub(super) fn feature_seed(base_seed: u64, feature: &str) -> u64 {
    base_seed ^ fnv1a(feature)
}

pub(super) fn feature_rng(base_seed: u64, feature: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(feature_seed(base_seed, feature))
}

/// Draws `n_bootstrap` resamples of size `min(50, values.len())`, with
/// replacement, and returns the two-sided percentile confidence interval of
/// the resulting bootstrap means.
pub(super) fn bootstrap_ci(
    values: &[f64],
    n_bootstrap: usize,
    confidence_level: f64,
    rng: &mut ChaCha8Rng,
) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let sample_size = values.len().min(50);
    let mut means = Vec::with_capacity(n_bootstrap);
    for _ in 0..n_bootstrap {
        let mut sum = 0.0;
        for _ in 0..sample_size {
            let idx = rng.gen_range(0..values.len());
            sum += values[idx];
        }
        means.push(sum / sample_size as f64);
    }
    percentile_interval(means, confidence_level)
}
