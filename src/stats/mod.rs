// ==========================================
// Shared numeric helpers
// ==========================================
// Small, pure statistics functions used by the stability and feature-weight
// engines. Kept free of domain types so they can be unit tested in
// isolation from any entity struct.
// ==========================================

use statrs::distribution::{ContinuousCDF, Normal};

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation. Returns `None` when fewer than 2 samples
/// are given (variance undefined), distinct from a sample that legitimately
/// has zero spread.
pub fn stdev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(var.sqrt())
}

/// Coefficient of variation = stdev / |mean|.
///
/// A single sample (n=1) is treated as CV=0 (perfect consistency); a
/// genuinely undefined case (mean == 0 with spread) falls back to the
/// neutral 0.5 value the caller applies.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let m = mean(values);
    if m.abs() < f64::EPSILON {
        return 0.5;
    }
    match stdev(values) {
        Some(sd) => (sd / m.abs()).max(0.0),
        None => 0.5,
    }
}

/// Bootstrap a 2-sided confidence interval from a set of bootstrap means.
/// `confidence_level` e.g. 0.95 → returns the [2.5%, 97.5%] quantiles.
pub fn percentile_interval(mut sorted_means: Vec<f64>, confidence_level: f64) -> (f64, f64) {
    if sorted_means.is_empty() {
        return (0.0, 0.0);
    }
    sorted_means.sort_by(|a, b| a.total_cmp(b));
    let alpha = 1.0 - confidence_level;
    let n = sorted_means.len();
    let lower_idx = ((alpha / 2.0) * n as f64).floor() as usize;
    let upper_idx = (((1.0 - alpha / 2.0) * n as f64).ceil() as usize).saturating_sub(1);
    let lower_idx = lower_idx.min(n - 1);
    let upper_idx = upper_idx.min(n - 1);
    (sorted_means[lower_idx], sorted_means[upper_idx.max(lower_idx)])
}

/// Overlap of two closed intervals mapped to [0, 1] separation confidence:
/// `1 - overlapLength / unionLength`, clamped. Disjoint intervals yield 1.0;
/// identical intervals yield 0.0.
pub fn interval_separation(a: (f64, f64), b: (f64, f64)) -> f64 {
    let union_lo = a.0.min(b.0);
    let union_hi = a.1.max(b.1);
    let union_len = union_hi - union_lo;
    if union_len <= f64::EPSILON {
        return 0.0;
    }
    let overlap_lo = a.0.max(b.0);
    let overlap_hi = a.1.min(b.1);
    let overlap_len = (overlap_hi - overlap_lo).max(0.0);
    (1.0 - overlap_len / union_len).clamp(0.0, 1.0)
}

/// Two-sided Mann-Whitney U test, normal approximation.
///
/// Returns `(u_statistic, p_value)`. `p_value` is clamped to `[0, 1]`; when
/// either sample is empty or both samples are degenerate (zero variance in
/// ranks), returns `p_value = 1.0` (no evidence of separation) per the
/// NumericEdgeCase recovery policy.
pub fn mann_whitney_u(a: &[f64], b: &[f64]) -> (f64, f64) {
    let n1 = a.len();
    let n2 = b.len();
    if n1 == 0 || n2 == 0 {
        return (0.0, 1.0);
    }

    let mut combined: Vec<(f64, usize)> = a
        .iter()
        .map(|&v| (v, 0usize))
        .chain(b.iter().map(|&v| (v, 1usize)))
        .collect();
    combined.sort_by(|x, y| x.0.total_cmp(&y.0));

    // Assign average ranks for ties.
    let mut ranks = vec![0.0_f64; combined.len()];
    let mut i = 0;
    while i < combined.len() {
        let mut j = i;
        while j + 1 < combined.len() && (combined[j + 1].0 - combined[i].0).abs() < f64::EPSILON {
            j += 1;
        }
        let avg_rank = ((i + 1) + (j + 1)) as f64 / 2.0;
        for r in ranks.iter_mut().take(j + 1).skip(i) {
            *r = avg_rank;
        }
        i = j + 1;
    }

    let rank_sum_a: f64 = combined
        .iter()
        .zip(ranks.iter())
        .filter(|((_, group), _)| *group == 0)
        .map(|(_, &r)| r)
        .sum();

    let u1 = rank_sum_a - (n1 * (n1 + 1)) as f64 / 2.0;
    let u2 = (n1 * n2) as f64 - u1;
    let u = u1.min(u2);

    let n1f = n1 as f64;
    let n2f = n2 as f64;
    let mean_u = n1f * n2f / 2.0;
    let var_u = n1f * n2f * (n1f + n2f + 1.0) / 12.0;
    if var_u <= 0.0 {
        return (u, 1.0);
    }
    let sd_u = var_u.sqrt();

    // Continuity-corrected z-score.
    let z = (u - mean_u + 0.5 * (if u < mean_u { 1.0 } else { -1.0 })) / sd_u;
    let normal = Normal::new(0.0, 1.0).expect("standard normal is always valid");
    let p_one_sided = normal.cdf(-z.abs());
    let p_two_sided = (2.0 * p_one_sided).clamp(0.0, 1.0);

    (u, p_two_sided)
}

/// z-score for a given two-sided confidence level, via the standard normal
/// quantile function (used where a parametric CI half-width is needed).
pub fn z_for_confidence(confidence_level: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).expect("standard normal is always valid");
    let target = 0.5 + confidence_level / 2.0;
    // Bisection inverse CDF; statrs' Normal doesn't expose `inverse_cdf`
    // directly in all versions, so we solve it explicitly for robustness.
    let mut lo = -10.0_f64;
    let mut hi = 10.0_f64;
    for _ in 0..100 {
        let mid = (lo + hi) / 2.0;
        if normal.cdf(mid) < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0
}
