// ==========================================
// Tier-1 Phase 1 (unique matches) and Phase 2 (greedy constrained resolution)
// ==========================================

use super::make_assignment;
use crate::domain::assignment::Assignment;
use crate::domain::demand::PendingMoldDemand;
use crate::domain::priority_matrix::PriorityMatrix;
use std::collections::{HashMap, HashSet};

/// Phase 1: any mold whose priority row has exactly one nonzero machine is
/// assigned to that machine outright, provided it fits under the load cap.
pub(super) fn unique_matches(
    pending: &mut HashMap<String, &PendingMoldDemand>,
    priority_matrix: &PriorityMatrix,
    load: &mut HashMap<String, f64>,
    max_load_threshold: f64,
    counters: &mut HashMap<String, u32>,
    assignments: &mut Vec<Assignment>,
    assigned_molds: &mut HashSet<String>,
) {
    let mut mold_ids: Vec<String> = pending.keys().cloned().collect();
    mold_ids.sort();

    for mold_id in mold_ids {
        let row = priority_matrix.row(&mold_id);
        if row.len() != 1 {
            continue;
        }
        let (machine_code, _rank) = &row[0];
        let demand = pending[&mold_id];
        let current = *load.get(machine_code).unwrap_or(&0.0);
        if current + demand.lead_time_days > max_load_threshold {
            continue;
        }
        make_assignment(&demand.po_nos, &mold_id, machine_code, counters, assignments);
        *load.entry(machine_code.clone()).or_insert(0.0) += demand.lead_time_days;
        assigned_molds.insert(mold_id.clone());
        pending.remove(&mold_id);
    }
}

/// Phase 2: process machines tightest-constraint-first (fewest remaining
/// candidate molds), assigning each machine the first candidate mold (by
/// ascending rank, ties by ascending mold id) that still fits under the
/// load cap. Returns whether any assignment was made this pass.
pub(super) fn greedy_pass(
    pending: &mut HashMap<String, &PendingMoldDemand>,
    priority_matrix: &PriorityMatrix,
    load: &mut HashMap<String, f64>,
    max_load_threshold: f64,
    counters: &mut HashMap<String, u32>,
    assignments: &mut Vec<Assignment>,
    assigned_molds: &mut HashSet<String>,
) -> bool {
    // machine_code -> Vec<(mold_id, rank)>, restricted to still-pending molds.
    let mut candidates: HashMap<String, Vec<(String, u32)>> = HashMap::new();
    for (mold_id, _demand) in pending.iter() {
        for (machine_code, rank) in priority_matrix.row(mold_id) {
            candidates.entry(machine_code).or_default().push((mold_id.clone(), rank));
        }
    }

    let mut machines: Vec<String> = candidates.keys().cloned().collect();
    machines.sort_by(|a, b| {
        let count_a = candidates[a].len();
        let count_b = candidates[b].len();
        count_a.cmp(&count_b).then_with(|| a.cmp(b))
    });

    let mut made_progress = false;
    for machine_code in machines {
        let mut ranked = candidates[&machine_code].clone();
        ranked.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        for (mold_id, _rank) in ranked {
            let Some(&demand) = pending.get(&mold_id) else {
                continue;
            };
            let current = *load.get(&machine_code).unwrap_or(&0.0);
            if current + demand.lead_time_days > max_load_threshold {
                continue;
            }
            make_assignment(&demand.po_nos, &mold_id, &machine_code, counters, assignments);
            *load.entry(machine_code.clone()).or_insert(0.0) += demand.lead_time_days;
            assigned_molds.insert(mold_id.clone());
            pending.remove(&mold_id);
            made_progress = true;
            break;
        }
    }

    made_progress
}
