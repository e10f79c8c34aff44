// ==========================================
// Stability Index Engine scenarios, driven from a full Snapshot
// ==========================================

use chrono::NaiveDate;
use mold_plan_core::{Diagnostics, EngineConfig, Mold, ProductionRecord, Snapshot, StabilityEngine};
use mold_plan_core::domain::types::Shift;

fn mold_m1() -> Mold {
    Mold {
        mold_id: "M1".into(),
        cavity_standard: 4,
        setting_cycle_seconds: 10.0,
        tonnage_range: (50.0, 150.0),
    }
}

fn record(date: NaiveDate, mold_shot: i64, cavity: i32) -> ProductionRecord {
    ProductionRecord {
        record_date: date,
        shift_id: Shift::First,
        machine_id: "MC01".into(),
        mold_id: "M1".into(),
        item_code: "ITEM-1".into(),
        po_no: "PO-1".into(),
        mold_shot,
        item_good_qty: mold_shot * cavity,
        item_defect_qty: 0,
        observed_cavity: cavity,
    }
}

fn snapshot_with_records(records: Vec<ProductionRecord>) -> Snapshot {
    Snapshot {
        molds: vec![mold_m1()],
        production_records: records,
        ..Default::default()
    }
}

#[test]
fn single_stable_mold_single_machine_matches_scenario_one() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let records: Vec<ProductionRecord> = (0..60)
        .map(|i| record(date + chrono::Duration::days(i), 2880, 4))
        .collect();
    let snapshot = snapshot_with_records(records);
    let config = EngineConfig::default();
    let mut diagnostics = Diagnostics::new();

    let report = StabilityEngine::new().compute_report(&snapshot, &config, &mut diagnostics);

    assert_eq!(report.rows.len(), 1);
    let row = &report.rows[0];
    assert!((row.cavity_stability_index - 1.0).abs() < 1e-9);
    assert!((row.cycle_stability_index - 1.0).abs() < 1e-9);
    assert!((row.theoretical_capacity - 1440.0).abs() < 1e-9);
    assert!((row.effective_capacity - 1440.0).abs() < 1e-9);
    assert!((row.estimated_capacity - 1180.8).abs() < 1e-6);
    assert!((row.trust_coefficient - 1.0).abs() < 1e-9);
    assert!((row.balanced_capacity - 1440.0).abs() < 1e-9);
}

#[test]
fn cycle_drift_matches_scenario_two() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let records: Vec<ProductionRecord> = (0..30)
        .map(|i| record(date + chrono::Duration::days(i), 2400, 4))
        .collect();
    let snapshot = snapshot_with_records(records);
    let config = EngineConfig::default();
    let mut diagnostics = Diagnostics::new();

    let report = StabilityEngine::new().compute_report(&snapshot, &config, &mut diagnostics);

    assert_eq!(report.rows.len(), 1);
    assert!((report.rows[0].cycle_stability_index - 0.94).abs() < 1e-6);
}

#[test]
fn stability_and_capacity_stay_within_bounds() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let records: Vec<ProductionRecord> = (0..10)
        .map(|i| record(date + chrono::Duration::days(i), 2000 + i * 77, 3))
        .collect();
    let snapshot = snapshot_with_records(records);
    let config = EngineConfig::default();
    let mut diagnostics = Diagnostics::new();

    let report = StabilityEngine::new().compute_report(&snapshot, &config, &mut diagnostics);
    let row = &report.rows[0];
    assert!((0.0..=1.0).contains(&row.cavity_stability_index));
    assert!((0.0..=1.0).contains(&row.cycle_stability_index));
    assert!((0.0..=1.0).contains(&row.overall_stability));
}

#[test]
fn adding_records_matching_standard_never_decreases_overall_stability_or_effective_capacity() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let config = EngineConfig::default();

    let fewer: Vec<ProductionRecord> = (0..5).map(|i| record(date + chrono::Duration::days(i), 2880, 4)).collect();
    let mut diagnostics = Diagnostics::new();
    let report_fewer = StabilityEngine::new().compute_report(&snapshot_with_records(fewer.clone()), &config, &mut diagnostics);

    let mut more = fewer;
    more.extend((5..20).map(|i| record(date + chrono::Duration::days(i), 2880, 4)));
    let mut diagnostics2 = Diagnostics::new();
    let report_more = StabilityEngine::new().compute_report(&snapshot_with_records(more), &config, &mut diagnostics2);

    assert!(report_more.rows[0].overall_stability >= report_fewer.rows[0].overall_stability - 1e-9);
    assert!(report_more.rows[0].effective_capacity >= report_fewer.rows[0].effective_capacity - 1e-9);
    assert!((report_more.rows[0].estimated_capacity - report_fewer.rows[0].estimated_capacity).abs() < 1e-9);
}
