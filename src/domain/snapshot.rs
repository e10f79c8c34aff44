// ==========================================
// Snapshot — the inbound data contract
// ==========================================
// Required columns are those named on each entity struct; unknown extra
// columns are the ingestion layer's problem, not ours. What lands here
// is already typed.
// ==========================================

use crate::domain::machine::Machine;
use crate::domain::mold::{Mold, MoldSpec};
use crate::domain::order::{OrderStatus, PurchaseOrder};
use crate::domain::production::ProductionRecord;
use crate::domain::stability::StabilityReport;
use crate::domain::weights::FeatureWeightReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Snapshot {
    pub molds: Vec<Mold>,
    pub machines: Vec<Machine>,
    pub mold_specs: Vec<MoldSpec>,
    pub production_records: Vec<ProductionRecord>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub order_statuses: Vec<OrderStatus>,

    /// Fingerprint of the frames above as computed by a prior invocation,
    /// supplied by the caller so the orchestrator can attempt a short-circuit.
    pub prior_fingerprint: Option<String>,
    /// Prior StabilityReport, reused verbatim when the fingerprint matches.
    pub prior_stability: Option<StabilityReport>,
    /// Prior FeatureWeightReport, reused verbatim when the fingerprint matches.
    pub prior_feature_weights: Option<FeatureWeightReport>,
}

impl Snapshot {
    pub fn mold_by_id(&self, mold_id: &str) -> Option<&Mold> {
        self.molds.iter().find(|m| m.mold_id == mold_id)
    }

    pub fn machine_by_code(&self, machine_code: &str) -> Option<&Machine> {
        self.machines.iter().find(|m| m.machine_code == machine_code)
    }

    pub fn machine_by_id(&self, machine_id: &str) -> Option<&Machine> {
        self.machines.iter().find(|m| m.machine_id == machine_id)
    }

    pub fn mold_spec(&self, mold_id: &str) -> Option<&MoldSpec> {
        self.mold_specs.iter().find(|s| s.mold_id == mold_id)
    }

    pub fn order_status(&self, po_no: &str) -> Option<&OrderStatus> {
        self.order_statuses.iter().find(|s| s.po_no == po_no)
    }

    pub fn purchase_order(&self, po_no: &str) -> Option<&PurchaseOrder> {
        self.purchase_orders.iter().find(|p| p.po_no == po_no)
    }
}
