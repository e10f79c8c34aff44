// ==========================================
// Tier-1 Optimizer — history-based greedy assignment
// ==========================================
// Places pending molds onto machines using the priority matrix alone:
// unique matches first, then a tightest-constraint-first greedy pass,
// both under a per-machine load cap. Compatibility is not considered here
// at all — a mold with no priority row is left for Tier-2.
// ==========================================

mod phases;
#[cfg(test)]
mod tests;

use crate::domain::assignment::Assignment;
use crate::domain::demand::PendingMoldDemand;
use crate::domain::diagnostics::{Diagnostics, Warning};
use crate::domain::priority_matrix::PriorityMatrix;
use crate::domain::types::{AssignmentSource, Stage};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Safety bound on Phase 2 passes, well above anything a realistic mold
/// count would require; exists purely so a modeling bug cannot spin
/// forever.
const MAX_ITERATIONS: usize = 10_000;

#[derive(Debug, Default)]
pub struct Tier1Result {
    pub assignments: Vec<Assignment>,
    pub machine_load: HashMap<String, f64>,
    pub assigned_molds: HashSet<String>,
    pub unassigned_molds: Vec<String>,
    /// Highest `priority_in_machine` Tier-1 placed on each machine, used by
    /// Tier-2 to keep its own priorities strictly higher on the same
    /// machine.
    pub max_priority_per_machine: HashMap<String, u32>,
}

#[derive(Debug, Default)]
pub struct Tier1Optimizer;

impl Tier1Optimizer {
    pub fn new() -> Self {
        Self
    }

    pub fn optimize(
        &self,
        demands: &[PendingMoldDemand],
        priority_matrix: &PriorityMatrix,
        initial_load: &HashMap<String, f64>,
        max_load_threshold: f64,
        diagnostics: &mut Diagnostics,
    ) -> Tier1Result {
        let mut load = initial_load.clone();
        let mut counters: HashMap<String, u32> = HashMap::new();
        let mut assignments = Vec::new();
        let mut assigned_molds: HashSet<String> = HashSet::new();

        // Molds with no priority row at all never enter the optimizer loop;
        // they fall straight through to Tier-2.
        let mut pending: HashMap<String, &PendingMoldDemand> = HashMap::new();
        for demand in demands {
            if priority_matrix.has_row(&demand.mold_id) {
                pending.insert(demand.mold_id.clone(), demand);
            } else {
                diagnostics.push_warning(
                    Warning::new(Stage::Tier1, "no_priority_row", "mold has no historical priority row")
                        .with_mold(demand.mold_id.clone()),
                );
            }
        }

        phases::unique_matches(
            &mut pending,
            priority_matrix,
            &mut load,
            max_load_threshold,
            &mut counters,
            &mut assignments,
            &mut assigned_molds,
        );

        let mut iterations = 0;
        loop {
            if pending.is_empty() || iterations >= MAX_ITERATIONS {
                break;
            }
            iterations += 1;
            let made_progress = phases::greedy_pass(
                &mut pending,
                priority_matrix,
                &mut load,
                max_load_threshold,
                &mut counters,
                &mut assignments,
                &mut assigned_molds,
            );
            if !made_progress {
                break;
            }
        }

        let unassigned_molds: Vec<String> = {
            let mut molds: Vec<String> = demands
                .iter()
                .map(|d| d.mold_id.clone())
                .filter(|m| !assigned_molds.contains(m))
                .collect();
            molds.sort();
            molds.dedup();
            molds
        };

        debug!(
            assigned = assigned_molds.len(),
            unassigned = unassigned_molds.len(),
            iterations,
            "tier1 optimizer: complete"
        );

        Tier1Result {
            assignments,
            machine_load: load,
            assigned_molds,
            unassigned_molds,
            max_priority_per_machine: counters,
        }
    }
}

pub(super) fn make_assignment(
    po_nos: &[String],
    mold_id: &str,
    machine_code: &str,
    counters: &mut HashMap<String, u32>,
    out: &mut Vec<Assignment>,
) {
    let counter = counters.entry(machine_code.to_string()).or_insert(0);
    for po_no in po_nos {
        *counter += 1;
        out.push(Assignment {
            po_no: po_no.clone(),
            mold_id: mold_id.to_string(),
            machine_code: machine_code.to_string(),
            priority_in_machine: *counter,
            source: AssignmentSource::HistBased,
        });
    }
}
