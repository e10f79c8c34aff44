// ==========================================
// PerformanceSample — per-(PO, mold, machine) feature observation
// ==========================================

use crate::domain::types::Group;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSample {
    pub mold_id: String,
    pub machine_code: String,
    pub po_no: String,
    pub shift_ng_rate: f64,
    pub shift_cavity_rate: f64,
    pub shift_cycle_time_rate: f64,
    pub shift_capacity_rate: f64,
    pub group: Group,
}

impl PerformanceSample {
    pub fn feature_value(&self, feature: &str) -> Option<f64> {
        match feature {
            "shiftNGRate" => Some(self.shift_ng_rate),
            "shiftCavityRate" => Some(self.shift_cavity_rate),
            "shiftCycleTimeRate" => Some(self.shift_cycle_time_rate),
            "shiftCapacityRate" => Some(self.shift_capacity_rate),
            _ => None,
        }
    }
}

/// The four canonical feature names in their fixed evaluation order.
pub const FEATURE_NAMES: [&str; 4] = [
    "shiftNGRate",
    "shiftCavityRate",
    "shiftCycleTimeRate",
    "shiftCapacityRate",
];
