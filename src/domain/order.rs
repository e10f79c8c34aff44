// ==========================================
// PurchaseOrder / OrderStatus — order master + lifecycle state
// ==========================================

use crate::domain::types::EtaStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub po_no: String,
    pub item_code: String,
    pub item_name: String,
    pub item_quantity: i64,
    pub po_eta: Option<NaiveDate>,
    pub po_received_date: Option<NaiveDate>,
}

/// Tracked state for a purchase order. `state == Molded` iff
/// `item_remain == 0`; the performance aggregator pushes an
/// `inconsistent_order_reference` warning and skips the order when that
/// doesn't hold, rather than trusting either field blindly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatus {
    pub po_no: String,
    pub state: crate::domain::types::OrderState,
    pub item_remain: i64,
    pub eta_status: EtaStatus,
    pub last_machine_id: Option<String>,
    pub last_mold_id: Option<String>,
    pub started_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl OrderStatus {
    pub fn is_completed(&self) -> bool {
        self.state == crate::domain::types::OrderState::Molded && self.item_remain == 0
    }

    pub fn is_molding(&self) -> bool {
        self.state == crate::domain::types::OrderState::Molding
    }
}
