// ==========================================
// StabilityRow — per-mold stability indices and capacity estimates
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityRow {
    pub mold_id: String,
    pub cavity_stability_index: f64,
    pub cycle_stability_index: f64,
    pub overall_stability: f64,
    pub theoretical_capacity: f64,
    pub effective_capacity: f64,
    pub estimated_capacity: f64,
    pub balanced_capacity: f64,
    pub trust_coefficient: f64,
    pub total_records: i64,
}

/// Output bundle of the stability engine for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StabilityReport {
    pub rows: Vec<StabilityRow>,
}

impl StabilityReport {
    pub fn get(&self, mold_id: &str) -> Option<&StabilityRow> {
        self.rows.iter().find(|r| r.mold_id == mold_id)
    }
}
