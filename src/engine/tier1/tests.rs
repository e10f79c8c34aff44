use super::*;
use crate::domain::diagnostics::Diagnostics;

fn demand(mold_id: &str, lead_time_days: f64) -> PendingMoldDemand {
    PendingMoldDemand {
        mold_id: mold_id.to_string(),
        po_nos: vec![format!("PO-{mold_id}")],
        total_quantity: 1000,
        lead_time_days,
    }
}

#[test]
fn unique_match_takes_the_tighter_constraint_first() {
    // M1 is only compatible with K1; M2 prefers K1 but can also use K2.
    // The unique-match phase should grab M1 -> K1 first, freeing K2 for M2.
    let mut matrix = PriorityMatrix::new();
    matrix.set_rank("M1", "K1", 1);
    matrix.set_rank("M2", "K1", 2);
    matrix.set_rank("M2", "K2", 1);

    let demands = vec![demand("M1", 10.0), demand("M2", 15.0)];
    let optimizer = Tier1Optimizer::new();
    let mut diagnostics = Diagnostics::new();
    let result = optimizer.optimize(&demands, &matrix, &HashMap::new(), 30.0, &mut diagnostics);

    assert_eq!(result.unassigned_molds.len(), 0);
    let m1 = result.assignments.iter().find(|a| a.mold_id == "M1").unwrap();
    let m2 = result.assignments.iter().find(|a| a.mold_id == "M2").unwrap();
    assert_eq!(m1.machine_code, "K1");
    assert_eq!(m2.machine_code, "K2");
}

#[test]
fn overflow_beyond_threshold_is_left_unassigned_for_tier2() {
    // M1, M2, M3 are all only compatible with K1, whose load threshold
    // admits just two of the three before the third overflows to tier 2.
    let mut matrix = PriorityMatrix::new();
    matrix.set_rank("M1", "K1", 1);
    matrix.set_rank("M2", "K1", 2);
    matrix.set_rank("M3", "K1", 3);

    let demands = vec![demand("M1", 10.0), demand("M2", 10.0), demand("M3", 15.0)];
    let optimizer = Tier1Optimizer::new();
    let mut diagnostics = Diagnostics::new();
    let result = optimizer.optimize(&demands, &matrix, &HashMap::new(), 20.0, &mut diagnostics);

    assert_eq!(result.assigned_molds.len(), 2);
    assert!(result.assigned_molds.contains("M1"));
    assert!(result.assigned_molds.contains("M2"));
    assert_eq!(result.unassigned_molds, vec!["M3".to_string()]);
    assert!((result.machine_load["K1"] - 20.0).abs() < 1e-9);
}

#[test]
fn mold_with_no_priority_row_is_unassigned_here() {
    let matrix = PriorityMatrix::new();
    let demands = vec![demand("M1", 10.0)];
    let optimizer = Tier1Optimizer::new();
    let mut diagnostics = Diagnostics::new();
    let result = optimizer.optimize(&demands, &matrix, &HashMap::new(), 30.0, &mut diagnostics);

    assert!(result.assignments.is_empty());
    assert_eq!(result.unassigned_molds, vec!["M1".to_string()]);
}

#[test]
fn tier1_load_cap_holds_for_every_machine() {
    let mut matrix = PriorityMatrix::new();
    for (i, mold_id) in ["A", "B", "C", "D"].iter().enumerate() {
        matrix.set_rank(mold_id, "K1", (i + 1) as u32);
    }
    let demands: Vec<PendingMoldDemand> = ["A", "B", "C", "D"].iter().map(|m| demand(m, 9.0)).collect();
    let optimizer = Tier1Optimizer::new();
    let mut diagnostics = Diagnostics::new();
    let result = optimizer.optimize(&demands, &matrix, &HashMap::new(), 30.0, &mut diagnostics);

    assert!(result.machine_load.get("K1").copied().unwrap_or(0.0) <= 30.0 + 1e-9);
}
