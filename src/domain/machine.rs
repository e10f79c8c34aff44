// ==========================================
// Machine — injection press master data
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    pub machine_id: String,
    pub machine_code: String,
    pub tonnage: f64,
    pub active_flag: bool,
}
