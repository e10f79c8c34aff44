// ==========================================
// Priority Matrix Engine
// ==========================================
// Converts final feature weights and per-(mold, machine) good-group
// aggregates into a dense mold x machine rank matrix.
// ==========================================

mod aggregation;
mod scoring;
#[cfg(test)]
mod tests;

use crate::domain::priority_matrix::PriorityMatrix;
use crate::domain::sample::PerformanceSample;
use crate::domain::weights::FeatureWeightReport;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct PriorityMatrixEngine;

impl PriorityMatrixEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_matrix(&self, good: &[PerformanceSample], weights: &FeatureWeightReport) -> PriorityMatrix {
        let weight_map = weights.as_weight_map();
        let aggregated = aggregation::aggregate_by_combination(good);

        let mut by_mold: HashMap<String, Vec<(String, f64)>> = HashMap::new();
        for ((mold_id, machine_code), metrics) in &aggregated {
            let score = scoring::weighted_score(metrics, &weight_map);
            by_mold.entry(mold_id.clone()).or_default().push((machine_code.clone(), score));
        }

        let mut matrix = PriorityMatrix::new();
        for (mold_id, entries) in by_mold {
            let ranked = scoring::dense_ranks(entries);
            for (machine_code, rank) in ranked {
                matrix.set_rank(&mold_id, &machine_code, rank);
            }
        }

        debug!(molds = matrix.mold_ids().len(), "priority matrix engine: complete");
        matrix
    }
}
