// ==========================================
// Demand Engine — pending-PO mold demand and in-flight machine load
// ==========================================
// Precursor shared by both optimizer tiers: resolves which mold each
// pending purchase order belongs to, aggregates pending quantity into
// per-mold lead times, and derives the starting machine load vector from
// MOLDING purchase orders' remaining work.
// ==========================================

use crate::domain::demand::PendingMoldDemand;
use crate::domain::diagnostics::{Diagnostics, Warning};
use crate::domain::snapshot::Snapshot;
use crate::domain::stability::StabilityReport;
use crate::domain::types::{OrderState, Stage};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Hours in a production day, used to convert the stability engine's
/// hourly `balancedCapacity` into a daily rate for lead-time math. The
/// theoretical/effective/estimated/balanced capacities are all expressed
/// per hour (see `theoretical_capacity = 3600/settingCycle * cavityStandard`);
/// this crate assumes continuous 24-hour operation across shifts 1/2/3.
const HOURS_PER_DAY: f64 = 24.0;

#[derive(Debug, Default)]
pub struct DemandEngine;

impl DemandEngine {
    pub fn new() -> Self {
        Self
    }

    /// Maps each `itemCode` to the mold historically run against it, by
    /// picking the mold with the most working production records for that
    /// item. Pending purchase orders carry no direct mold reference (§3
    /// defines the PO/mold link only via shift history), so this is the
    /// concrete resolution strategy that stands in for that gap.
    pub fn resolve_item_mold_map(&self, snapshot: &Snapshot) -> HashMap<String, String> {
        let mut counts: HashMap<(String, String), i64> = HashMap::new();
        for record in &snapshot.production_records {
            if !record.is_working() {
                continue;
            }
            *counts
                .entry((record.item_code.clone(), record.mold_id.clone()))
                .or_insert(0) += 1;
        }

        let mut best: HashMap<String, (String, i64)> = HashMap::new();
        for ((item_code, mold_id), count) in counts {
            best.entry(item_code)
                .and_modify(|(current_mold, current_count)| {
                    if count > *current_count || (count == *current_count && mold_id < *current_mold) {
                        *current_mold = mold_id.clone();
                        *current_count = count;
                    }
                })
                .or_insert((mold_id, count));
        }

        best.into_iter().map(|(item, (mold, _))| (item, mold)).collect()
    }

    fn balanced_capacity_per_day(stability: &StabilityReport, mold_id: &str) -> Option<f64> {
        stability.get(mold_id).and_then(|row| {
            let per_day = row.balanced_capacity * HOURS_PER_DAY;
            if per_day > 0.0 {
                Some(per_day)
            } else {
                None
            }
        })
    }

    /// Aggregates every `PENDING` order's quantity into the mold it resolves
    /// to, yielding one `PendingMoldDemand` per mold with nonzero pending
    /// quantity and a computable capacity.
    pub fn pending_mold_demand(
        &self,
        snapshot: &Snapshot,
        stability: &StabilityReport,
        item_mold_map: &HashMap<String, String>,
        diagnostics: &mut Diagnostics,
    ) -> Vec<PendingMoldDemand> {
        let mut by_mold: HashMap<String, (Vec<String>, i64)> = HashMap::new();

        for status in &snapshot.order_statuses {
            if status.state != OrderState::Pending {
                continue;
            }
            let Some(po) = snapshot.purchase_order(&status.po_no) else {
                diagnostics.push_invalid(Stage::Tier1, status.po_no.clone(), "missing_purchase_order");
                continue;
            };
            let Some(mold_id) = item_mold_map.get(&po.item_code) else {
                diagnostics.push_warning(
                    Warning::new(
                        Stage::Tier1,
                        "unresolved_item_mold",
                        format!("no historical mold found for item {}", po.item_code),
                    )
                    .with_po(po.po_no.clone()),
                );
                continue;
            };
            let entry = by_mold.entry(mold_id.clone()).or_insert_with(|| (Vec::new(), 0));
            entry.0.push(po.po_no.clone());
            entry.1 += status.item_remain.max(0).min(po.item_quantity.max(0));
        }

        let mut demands = Vec::new();
        for (mold_id, (po_nos, total_quantity)) in by_mold {
            if total_quantity <= 0 {
                continue;
            }
            match Self::balanced_capacity_per_day(stability, &mold_id) {
                Some(capacity_per_day) => {
                    demands.push(PendingMoldDemand {
                        lead_time_days: total_quantity as f64 / capacity_per_day,
                        mold_id,
                        po_nos,
                        total_quantity,
                    });
                }
                None => {
                    diagnostics.push_invalid(Stage::Tier1, mold_id, "no_capacity_estimate");
                }
            }
        }

        demands.sort_by(|a, b| a.mold_id.cmp(&b.mold_id));
        debug!(demands = demands.len(), "demand engine: pending mold demand resolved");
        demands
    }

    /// Starting machine load (days), derived from `MOLDING` orders' still
    /// remaining quantity on the mold/machine they are currently running.
    pub fn machine_load(
        &self,
        snapshot: &Snapshot,
        stability: &StabilityReport,
        diagnostics: &mut Diagnostics,
    ) -> HashMap<String, f64> {
        let mut load: HashMap<String, f64> = HashMap::new();

        for status in &snapshot.order_statuses {
            if !status.is_molding() {
                continue;
            }
            let (Some(mold_id), Some(machine_id)) = (&status.last_mold_id, &status.last_machine_id) else {
                diagnostics.push_invalid(Stage::Tier1, status.po_no.clone(), "molding_order_missing_mold_or_machine");
                continue;
            };
            let Some(machine) = snapshot.machine_by_id(machine_id) else {
                diagnostics.push_invalid(Stage::Tier1, machine_id.clone(), "molding_order_machine_not_in_master_data");
                continue;
            };
            let Some(capacity_per_day) = Self::balanced_capacity_per_day(stability, mold_id) else {
                diagnostics.push_invalid(Stage::Tier1, mold_id.clone(), "molding_order_no_capacity_estimate");
                continue;
            };
            let remaining_days = status.item_remain.max(0) as f64 / capacity_per_day;
            *load.entry(machine.machine_code.clone()).or_insert(0.0) += remaining_days;
        }

        debug!(machines = load.len(), "demand engine: machine load resolved");
        load
    }

    /// All active machine codes, used to seed a zero-load entry for
    /// machines with no in-flight work so downstream tie-breaking over
    /// "ascending machine code" is stable even for idle machines.
    pub fn active_machine_codes(&self, snapshot: &Snapshot) -> HashSet<String> {
        snapshot
            .machines
            .iter()
            .filter(|m| m.active_flag)
            .map(|m| m.machine_code.clone())
            .collect()
    }
}
