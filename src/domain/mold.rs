// ==========================================
// Mold / MoldSpec — tooling master data
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single injection mold.
///
/// Invariant: `setting_cycle_seconds` and `cavity_standard` are strictly
/// positive for any mold that is to be scored by the stability engine. A
/// mold violating this is flagged invalid and excluded (see
/// [`crate::engine::stability`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mold {
    pub mold_id: String,
    pub cavity_standard: i32,
    pub setting_cycle_seconds: f64,
    pub tonnage_range: (f64, f64),
}

impl Mold {
    /// Whether this mold's master data is usable for stability/capacity
    /// computation at all.
    pub fn is_structurally_valid(&self) -> bool {
        self.cavity_standard >= 1 && self.setting_cycle_seconds > 0.0
    }
}

/// Compatibility spec for a mold: which machine codes it can physically run
/// on, keyed by tonnage intersection at ingestion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoldSpec {
    pub mold_id: String,
    pub compatible_machine_codes: HashSet<String>,
}

impl MoldSpec {
    pub fn is_compatible(&self, machine_code: &str) -> bool {
        self.compatible_machine_codes.contains(machine_code)
    }
}
