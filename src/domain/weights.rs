// ==========================================
// FeatureWeightRow / FeatureWeightReport — feature engine output
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureWeightRow {
    pub feature: String,
    pub traditional_weight: f64,
    pub separation_confidence: f64,
    pub enhanced_weight: f64,
    pub final_weight: f64,
    pub good_confidence: f64,
    pub bad_confidence: f64,
    pub good_sample_size: usize,
    pub bad_sample_size: usize,
    pub degraded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelReliability {
    pub overall_good_confidence: f64,
    pub overall_bad_confidence: f64,
    pub model_reliability: f64,
    pub valid_features_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureWeightReport {
    pub rows: Vec<FeatureWeightRow>,
    pub reliability: ModelReliability,
}

impl FeatureWeightReport {
    pub fn weight_of(&self, feature: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.feature == feature)
            .map(|r| r.final_weight)
    }

    pub fn as_weight_map(&self) -> std::collections::HashMap<String, f64> {
        self.rows
            .iter()
            .map(|r| (r.feature.clone(), r.final_weight))
            .collect()
    }
}
