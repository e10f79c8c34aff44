// ==========================================
// PendingMoldDemand — aggregated pending-PO demand per mold
// ==========================================
// One row per mold that still has pending quantity to plan, with the
// lead time the two-tier optimizers consume.
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingMoldDemand {
    pub mold_id: String,
    pub po_nos: Vec<String>,
    pub total_quantity: i64,
    /// `totalQuantity / balancedCapacityPerDay`.
    pub lead_time_days: f64,
}
