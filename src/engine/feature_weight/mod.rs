// ==========================================
// Feature Weight Engine
// ==========================================
// Splits confidence scoring and weight derivation from the good/bad
// samples produced by the performance aggregator into per-feature
// confidence-enhanced, normalized weights plus an overall reliability
// block.
// ==========================================

mod bootstrap;
mod confidence;
mod weights;

use crate::config::EngineConfig;
use crate::domain::diagnostics::{Diagnostics, Warning};
use crate::domain::sample::{PerformanceSample, FEATURE_NAMES};
use crate::domain::types::Stage;
use crate::domain::weights::{FeatureWeightReport, FeatureWeightRow, ModelReliability};
use crate::error::{CoreError, CoreResult};
use crate::stats::mean;
use rayon::prelude::*;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct FeatureWeightEngine;

struct FeatureOutcome {
    feature: &'static str,
    confidence: confidence::FeatureConfidence,
    good_mean: f64,
    good_sample_size: usize,
    bad_sample_size: usize,
}

impl FeatureWeightEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_report(
        &self,
        good: &[PerformanceSample],
        bad: &[PerformanceSample],
        config: &EngineConfig,
        diagnostics: &mut Diagnostics,
    ) -> CoreResult<FeatureWeightReport> {
        debug!(good = good.len(), bad = bad.len(), "feature weight engine: starting");

        let base_seed = config.random_seed.unwrap_or_else(rand::random::<u64>);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(FEATURE_NAMES.len())
            .build()
            .map_err(|e| CoreError::Other(e.into()))?;

        let mut outcomes: Vec<FeatureOutcome> = pool.install(|| {
            FEATURE_NAMES
                .par_iter()
                .map(|&feature| {
                    let good_values: Vec<f64> = good.iter().filter_map(|s| s.feature_value(feature)).collect();
                    let bad_values: Vec<f64> = bad.iter().filter_map(|s| s.feature_value(feature)).collect();
                    let target = config.target_for(feature);
                    let mut rng = bootstrap::feature_rng(base_seed, feature);
                    let conf = confidence::compute_confidence(
                        &good_values,
                        &bad_values,
                        &target,
                        config.n_bootstrap,
                        config.confidence_level,
                        config.min_sample_size,
                        &mut rng,
                    );
                    FeatureOutcome {
                        feature,
                        good_mean: mean(&good_values),
                        good_sample_size: good_values.len(),
                        bad_sample_size: bad_values.len(),
                        confidence: conf,
                    }
                })
                .collect()
        });

        // Sort by feature name so normalization is independent of whatever
        // order the bounded parallel pass happened to finish in.
        outcomes.sort_by_key(|o| o.feature);

        if outcomes.iter().all(|o| o.confidence.degraded) {
            return Err(CoreError::InsufficientData(
                "every feature failed min_sample_size".to_string(),
            ));
        }

        for outcome in &outcomes {
            if outcome.confidence.degraded {
                diagnostics.push_warning(
                    Warning::new(
                        Stage::FeatureWeight,
                        "insufficient_sample_size",
                        format!(
                            "feature {} has good_n={} bad_n={}, below min_sample_size",
                            outcome.feature, outcome.good_sample_size, outcome.bad_sample_size
                        ),
                    ),
                );
                warn!(feature = outcome.feature, "feature weight: degraded to neutral confidence");
            }
        }

        let traditional_weights: Vec<f64> = if let Some(overrides) = &config.feature_weights {
            let raw: Vec<f64> = outcomes
                .iter()
                .map(|o| overrides.get(o.feature).copied().unwrap_or(0.0).max(0.0))
                .collect();
            weights::normalize(&raw)
        } else {
            let raw: Vec<f64> = outcomes
                .iter()
                .map(|o| {
                    let target = config.target_for(o.feature);
                    let deviation = weights::feature_deviation(o.good_mean, &target);
                    weights::raw_traditional_weight(deviation, &target, config.scaling)
                })
                .collect();
            weights::normalize(&raw)
        };

        let enhanced: Vec<f64> = outcomes
            .iter()
            .zip(traditional_weights.iter())
            .map(|(o, &tw)| weights::enhanced_weight(tw, o.confidence.separation_confidence, config.confidence_weight))
            .collect();
        let final_weights = weights::normalize(&enhanced);

        let rows: Vec<FeatureWeightRow> = outcomes
            .iter()
            .zip(traditional_weights.iter())
            .zip(final_weights.iter())
            .map(|((o, &traditional_weight), &final_weight)| FeatureWeightRow {
                feature: o.feature.to_string(),
                traditional_weight,
                separation_confidence: o.confidence.separation_confidence,
                enhanced_weight: weights::enhanced_weight(
                    traditional_weight,
                    o.confidence.separation_confidence,
                    config.confidence_weight,
                ),
                final_weight,
                good_confidence: o.confidence.good_confidence,
                bad_confidence: o.confidence.bad_confidence,
                good_sample_size: o.good_sample_size,
                bad_sample_size: o.bad_sample_size,
                degraded: o.confidence.degraded,
            })
            .collect();

        let overall_good_confidence: f64 = rows.iter().map(|r| r.final_weight * r.good_confidence).sum();
        let overall_bad_confidence: f64 = rows.iter().map(|r| r.final_weight * r.bad_confidence).sum();
        let model_reliability = (overall_good_confidence + overall_bad_confidence) / 2.0;
        let valid_features_ratio =
            rows.iter().filter(|r| !r.degraded).count() as f64 / rows.len().max(1) as f64;

        debug!(model_reliability, valid_features_ratio, "feature weight engine: complete");

        Ok(FeatureWeightReport {
            rows,
            reliability: ModelReliability {
                overall_good_confidence,
                overall_bad_confidence,
                model_reliability,
                valid_features_ratio,
            },
        })
    }
}
