use super::*;
use crate::domain::machine::Machine;
use crate::domain::mold::{Mold, MoldSpec};
use crate::domain::production::ProductionRecord;
use crate::domain::snapshot::Snapshot;
use crate::domain::types::Shift;
use chrono::NaiveDate;

fn snapshot_with(mold: Mold, records: Vec<ProductionRecord>) -> Snapshot {
    Snapshot {
        molds: vec![mold],
        machines: Vec::<Machine>::new(),
        mold_specs: Vec::<MoldSpec>::new(),
        production_records: records,
        purchase_orders: Vec::new(),
        order_statuses: Vec::new(),
        prior_fingerprint: None,
        prior_stability: None,
        prior_feature_weights: None,
    }
}

fn record(date: NaiveDate, mold_id: &str, mold_shot: i64, cavity: i32) -> ProductionRecord {
    ProductionRecord {
        record_date: date,
        shift_id: Shift::First,
        machine_id: "MC01".into(),
        mold_id: mold_id.into(),
        item_code: "ITEM-1".into(),
        po_no: "PO-1".into(),
        mold_shot,
        item_good_qty: mold_shot * cavity,
        item_defect_qty: 0,
        observed_cavity: cavity,
    }
}

#[test]
fn batch_run_excludes_structurally_invalid_molds() {
    let bad_mold = Mold {
        mold_id: "M-BAD".into(),
        cavity_standard: 0,
        setting_cycle_seconds: 10.0,
        tonnage_range: (50.0, 150.0),
    };
    let snapshot = snapshot_with(bad_mold, Vec::new());
    let config = EngineConfig::default();
    let mut diagnostics = Diagnostics::new();

    let engine = StabilityEngine::new();
    let report = engine.compute_report(&snapshot, &config, &mut diagnostics);

    assert!(report.rows.is_empty());
    assert_eq!(diagnostics.invalid.count(Stage::Stability), 1);
}

#[test]
fn batch_run_warns_on_mold_with_no_working_records() {
    let mold = Mold {
        mold_id: "M1".into(),
        cavity_standard: 4,
        setting_cycle_seconds: 10.0,
        tonnage_range: (50.0, 150.0),
    };
    let snapshot = snapshot_with(mold, Vec::new());
    let config = EngineConfig::default();
    let mut diagnostics = Diagnostics::new();

    let engine = StabilityEngine::new();
    let report = engine.compute_report(&snapshot, &config, &mut diagnostics);

    assert!(report.rows.is_empty());
    assert_eq!(diagnostics.warnings.len(), 1);
    assert_eq!(diagnostics.invalid.count(Stage::Stability), 0);
}

#[test]
fn batch_run_produces_row_for_well_formed_mold() {
    let mold = Mold {
        mold_id: "M1".into(),
        cavity_standard: 4,
        setting_cycle_seconds: 10.0,
        tonnage_range: (50.0, 150.0),
    };
    let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let records = vec![record(date, "M1", 360, 4)];
    let snapshot = snapshot_with(mold, records);
    let config = EngineConfig::default();
    let mut diagnostics = Diagnostics::new();

    let engine = StabilityEngine::new();
    let report = engine.compute_report(&snapshot, &config, &mut diagnostics);

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].mold_id, "M1");
    assert_eq!(report.rows[0].total_records, 1);
}

#[test]
fn single_mold_query_fails_on_unknown_mold() {
    let mold = Mold {
        mold_id: "M1".into(),
        cavity_standard: 4,
        setting_cycle_seconds: 10.0,
        tonnage_range: (50.0, 150.0),
    };
    let snapshot = snapshot_with(mold, Vec::new());
    let config = EngineConfig::default();
    let engine = StabilityEngine::new();

    let result = engine.compute_single_mold("UNKNOWN", &snapshot, &config);
    assert!(result.is_err());
}

#[test]
fn single_mold_query_fails_when_no_working_records() {
    let mold = Mold {
        mold_id: "M1".into(),
        cavity_standard: 4,
        setting_cycle_seconds: 10.0,
        tonnage_range: (50.0, 150.0),
    };
    let snapshot = snapshot_with(mold, Vec::new());
    let config = EngineConfig::default();
    let engine = StabilityEngine::new();

    let result = engine.compute_single_mold("M1", &snapshot, &config);
    match result {
        Err(CoreError::InsufficientData(_)) => {}
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}

#[test]
fn single_mold_query_succeeds_with_sufficient_data() {
    let mold = Mold {
        mold_id: "M1".into(),
        cavity_standard: 4,
        setting_cycle_seconds: 10.0,
        tonnage_range: (50.0, 150.0),
    };
    let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let records = vec![record(date, "M1", 360, 4)];
    let snapshot = snapshot_with(mold, records);
    let config = EngineConfig::default();
    let engine = StabilityEngine::new();

    let row = engine.compute_single_mold("M1", &snapshot, &config).expect("row");
    assert_eq!(row.mold_id, "M1");
}
