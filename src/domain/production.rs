// ==========================================
// ProductionRecord — shift-level production history
// ==========================================

use crate::domain::types::Shift;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One shift's production record for a given machine/mold/item combination.
///
/// A record with `mold_shot == 0` is "non-working" and is excluded from
/// every stability/capacity computation (it carries no cycle or cavity
/// observation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub record_date: NaiveDate,
    pub shift_id: Shift,
    pub machine_id: String,
    pub mold_id: String,
    pub item_code: String,
    pub po_no: String,
    pub mold_shot: i64,
    pub item_good_qty: i64,
    pub item_defect_qty: i64,
    pub observed_cavity: i32,
}

impl ProductionRecord {
    pub fn is_working(&self) -> bool {
        self.mold_shot > 0
    }

    /// Observed cycle time in seconds under the 8-hour-shift basis:
    /// `3600 * 8 / mold_shot`.
    ///
    /// The 28800-second constant is preserved verbatim from the upstream
    /// system; whether the underlying shift window is a calendar day or a
    /// literal shift that may cross midnight is an open question the
    /// original leaves unresolved (see DESIGN.md).
    pub fn observed_cycle_seconds(&self) -> Option<f64> {
        if self.mold_shot <= 0 {
            return None;
        }
        Some(28_800.0 / self.mold_shot as f64)
    }

    pub fn produced_qty(&self) -> i64 {
        self.item_good_qty + self.item_defect_qty
    }

    pub fn ng_rate(&self) -> Option<f64> {
        let total = self.produced_qty();
        if total <= 0 {
            return None;
        }
        Some(self.item_defect_qty as f64 / total as f64)
    }
}
