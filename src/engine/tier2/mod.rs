// ==========================================
// Tier-2 Optimizer — compatibility-based fallback assignment
// ==========================================
// Places molds Tier-1 could not place, using raw tonnage compatibility
// (MoldSpec) instead of historical priority, picking the least-loaded
// compatible machine under the same load cap.
// ==========================================

mod compatibility;
mod sort_keys;

pub use compatibility::CompatibilityMatrix;

use crate::domain::assignment::Assignment;
use crate::domain::demand::PendingMoldDemand;
use crate::domain::diagnostics::{Diagnostics, Warning};
use crate::domain::types::{AssignmentSource, PriorityOrder, Stage};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct Tier2Result {
    pub assignments: Vec<Assignment>,
    pub machine_load: HashMap<String, f64>,
    pub unassigned_molds: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Tier2Optimizer;

impl Tier2Optimizer {
    pub fn new() -> Self {
        Self
    }

    /// `starting_priority_per_machine` carries Tier-1's highest
    /// `priority_in_machine` per machine, so Tier-2's own priorities are
    /// guaranteed strictly higher on any machine both tiers touch.
    #[allow(clippy::too_many_arguments)]
    pub fn optimize(
        &self,
        unassigned: &[PendingMoldDemand],
        compatibility: &CompatibilityMatrix,
        initial_load: &HashMap<String, f64>,
        max_load_threshold: f64,
        priority_order: PriorityOrder,
        starting_priority_per_machine: &HashMap<String, u32>,
        diagnostics: &mut Diagnostics,
    ) -> Tier2Result {
        let mut load = initial_load.clone();
        let mut counters = starting_priority_per_machine.clone();
        let mut assignments = Vec::new();
        let mut unassigned_molds = Vec::new();

        let mut ordered: Vec<&PendingMoldDemand> = unassigned.iter().collect();
        sort_keys::sort_by_priority_order(&mut ordered, compatibility, priority_order);

        for demand in ordered {
            let compatible = compatibility.compatible_machines(&demand.mold_id);
            if compatible.is_empty() {
                diagnostics.push_warning(
                    Warning::new(Stage::Tier2, "no_compatible_machine", "mold has no tonnage-compatible machine")
                        .with_mold(demand.mold_id.clone()),
                );
                unassigned_molds.push(demand.mold_id.clone());
                continue;
            }

            let fitting: Vec<String> = compatible
                .iter()
                .filter(|m| load.get(m.as_str()).copied().unwrap_or(0.0) + demand.lead_time_days <= max_load_threshold)
                .cloned()
                .collect();

            if fitting.is_empty() {
                diagnostics.push_warning(
                    Warning::new(
                        Stage::Tier2,
                        "optimization_infeasible",
                        format!(
                            "all {} compatible machine(s) would exceed the load cap",
                            compatible.len()
                        ),
                    )
                    .with_mold(demand.mold_id.clone()),
                );
                unassigned_molds.push(demand.mold_id.clone());
                continue;
            }

            let chosen = fitting
                .iter()
                .min_by(|a, b| {
                    let load_a = load.get(a.as_str()).copied().unwrap_or(0.0);
                    let load_b = load.get(b.as_str()).copied().unwrap_or(0.0);
                    load_a.total_cmp(&load_b).then_with(|| a.cmp(b))
                })
                .expect("fitting is non-empty")
                .clone();

            let counter = counters.entry(chosen.clone()).or_insert(0);
            for po_no in &demand.po_nos {
                *counter += 1;
                assignments.push(Assignment {
                    po_no: po_no.clone(),
                    mold_id: demand.mold_id.clone(),
                    machine_code: chosen.clone(),
                    priority_in_machine: *counter,
                    source: AssignmentSource::CompatibilityBased,
                });
            }
            *load.entry(chosen.clone()).or_insert(0.0) += demand.lead_time_days;
        }

        debug!(
            assigned = assignments.iter().map(|a| a.mold_id.clone()).collect::<std::collections::HashSet<_>>().len(),
            unassigned = unassigned_molds.len(),
            "tier2 optimizer: complete"
        );

        Tier2Result {
            assignments,
            machine_load: load,
            unassigned_molds,
        }
    }
}
