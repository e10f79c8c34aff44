// ==========================================
// EngineConfig — single configuration surface for the whole core
// ==========================================
// No persistence layer backs a multi-level override hierarchy here:
// callers own storage and pass one fully-resolved EngineConfig per
// invocation.
// ==========================================

use crate::domain::types::{FeatureTarget, PriorityOrder, Scaling};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    // ===== Stability / capacity =====
    pub efficiency: f64,
    pub loss: f64,
    pub cavity_stability_threshold: f64,
    pub cycle_stability_threshold: f64,
    pub total_records_threshold: i64,

    // ===== Feature weight engine =====
    pub scaling: Scaling,
    pub confidence_weight: f64,
    pub n_bootstrap: usize,
    pub confidence_level: f64,
    pub min_sample_size: usize,
    pub targets: HashMap<String, FeatureTarget>,
    pub feature_weights: Option<HashMap<String, f64>>,
    pub random_seed: Option<u64>,

    // ===== Optimizers =====
    pub max_load_threshold: f64,
    pub priority_order: PriorityOrder,

    // ===== Orchestrator =====
    pub historical_insight_threshold: i64,
    pub regenerate: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let mut targets = HashMap::new();
        targets.insert("shiftNGRate".to_string(), FeatureTarget::Minimize);
        targets.insert("shiftCavityRate".to_string(), FeatureTarget::Value(1.0));
        targets.insert("shiftCycleTimeRate".to_string(), FeatureTarget::Value(1.0));
        targets.insert("shiftCapacityRate".to_string(), FeatureTarget::Value(1.0));

        Self {
            efficiency: 0.85,
            loss: 0.03,
            cavity_stability_threshold: 0.6,
            cycle_stability_threshold: 0.4,
            total_records_threshold: 30,

            scaling: Scaling::Absolute,
            confidence_weight: 0.3,
            n_bootstrap: 500,
            confidence_level: 0.95,
            min_sample_size: 10,
            targets,
            feature_weights: None,
            random_seed: None,

            max_load_threshold: 30.0,
            priority_order: PriorityOrder::Priority1,

            historical_insight_threshold: 30,
            regenerate: false,
        }
    }
}

impl EngineConfig {
    /// Performs the InvalidConfig checks named in the external interface
    /// contract. Called by the orchestrator before any engine runs.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.efficiency > 0.0 && self.efficiency <= 1.0) {
            return Err(CoreError::InvalidConfig(format!(
                "efficiency must be in (0, 1], got {}",
                self.efficiency
            )));
        }
        if !(self.loss >= 0.0 && self.loss < 1.0) {
            return Err(CoreError::InvalidConfig(format!(
                "loss must be in [0, 1), got {}",
                self.loss
            )));
        }
        if self.efficiency <= self.loss {
            return Err(CoreError::InvalidConfig(format!(
                "efficiency ({}) must be greater than loss ({})",
                self.efficiency, self.loss
            )));
        }
        if !(0.0..=1.0).contains(&self.cavity_stability_threshold) {
            return Err(CoreError::InvalidConfig(
                "cavity_stability_threshold must be in [0, 1]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.cycle_stability_threshold) {
            return Err(CoreError::InvalidConfig(
                "cycle_stability_threshold must be in [0, 1]".to_string(),
            ));
        }
        if self.total_records_threshold < 1 {
            return Err(CoreError::InvalidConfig(
                "total_records_threshold must be >= 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence_weight) {
            return Err(CoreError::InvalidConfig(
                "confidence_weight must be in [0, 1]".to_string(),
            ));
        }
        if self.n_bootstrap < 1 {
            return Err(CoreError::InvalidConfig("n_bootstrap must be >= 1".to_string()));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(CoreError::InvalidConfig(
                "confidence_level must be in (0, 1)".to_string(),
            ));
        }
        if self.min_sample_size < 1 {
            return Err(CoreError::InvalidConfig(
                "min_sample_size must be >= 1".to_string(),
            ));
        }
        if self.max_load_threshold <= 0.0 {
            return Err(CoreError::InvalidConfig(
                "max_load_threshold must be > 0".to_string(),
            ));
        }
        if self.historical_insight_threshold < 1 {
            return Err(CoreError::InvalidConfig(
                "historical_insight_threshold must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn target_for(&self, feature: &str) -> FeatureTarget {
        self.targets
            .get(feature)
            .cloned()
            .unwrap_or(FeatureTarget::Minimize)
    }
}
