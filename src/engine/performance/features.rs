// ==========================================
// Per-(PO, mold, machine) feature computation
// ==========================================

use crate::domain::production::ProductionRecord;
use crate::stats::mean;

const SHIFT_HOURS: f64 = 8.0;

pub(super) struct FeatureInputs {
    pub shift_ng_rate: f64,
    pub shift_cavity_rate: f64,
    pub shift_cycle_time_rate: f64,
    pub shift_capacity_rate: f64,
}

/// Aggregates one (poNo, moldId, machineCode)'s working records into the
/// four canonical features. `balanced_capacity_per_hour` is the mold's
/// `StabilityRow::balanced_capacity`; the per-shift figure it is compared
/// against uses the fixed 8-hour shift basis, consistent with the
/// `observed_cycle_seconds` convention elsewhere in the crate.
pub(super) fn compute_features(
    records: &[&ProductionRecord],
    cavity_standard: i32,
    setting_cycle_seconds: f64,
    balanced_capacity_per_hour: f64,
) -> Option<FeatureInputs> {
    let working: Vec<&&ProductionRecord> = records.iter().filter(|r| r.is_working()).collect();
    if working.is_empty() {
        return None;
    }

    let total_good: i64 = working.iter().map(|r| r.item_good_qty).sum();
    let total_defect: i64 = working.iter().map(|r| r.item_defect_qty).sum();
    let total_produced = total_good + total_defect;
    let shift_ng_rate = if total_produced > 0 {
        total_defect as f64 / total_produced as f64
    } else {
        0.0
    };

    let cavities: Vec<f64> = working.iter().map(|r| r.observed_cavity as f64).collect();
    let shift_cavity_rate = if cavity_standard > 0 {
        mean(&cavities) / cavity_standard as f64
    } else {
        0.0
    };

    let cycles: Vec<f64> = working
        .iter()
        .filter_map(|r| r.observed_cycle_seconds())
        .collect();
    let shift_cycle_time_rate = if cycles.is_empty() || setting_cycle_seconds <= 0.0 {
        0.0
    } else {
        setting_cycle_seconds / mean(&cycles)
    };

    let distinct_shift_count = {
        let mut keys: Vec<(chrono::NaiveDate, crate::domain::types::Shift)> =
            working.iter().map(|r| (r.record_date, r.shift_id)).collect();
        keys.sort();
        keys.dedup();
        keys.len()
    };
    let produced_per_shift = if distinct_shift_count > 0 {
        total_produced as f64 / distinct_shift_count as f64
    } else {
        0.0
    };
    let balanced_capacity_per_shift = balanced_capacity_per_hour * SHIFT_HOURS;
    let shift_capacity_rate = if balanced_capacity_per_shift > 0.0 {
        produced_per_shift / balanced_capacity_per_shift
    } else {
        0.0
    };

    Some(FeatureInputs {
        shift_ng_rate,
        shift_cavity_rate,
        shift_cycle_time_rate,
        shift_capacity_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Shift;
    use chrono::NaiveDate;

    fn record(date: NaiveDate, shift: Shift, mold_shot: i64, cavity: i32, good: i64, defect: i64) -> ProductionRecord {
        ProductionRecord {
            record_date: date,
            shift_id: shift,
            machine_id: "MC01".into(),
            mold_id: "M1".into(),
            item_code: "ITEM-1".into(),
            po_no: "PO-1".into(),
            mold_shot,
            item_good_qty: good,
            item_defect_qty: defect,
            observed_cavity: cavity,
        }
    }

    #[test]
    fn perfect_run_yields_target_ratios() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let r = record(date, Shift::First, 2880, 4, 11520, 0);
        let recs = vec![&r];
        let features = compute_features(&recs, 4, 10.0, 1440.0).expect("features");
        assert!((features.shift_ng_rate - 0.0).abs() < 1e-9);
        assert!((features.shift_cavity_rate - 1.0).abs() < 1e-9);
        assert!((features.shift_cycle_time_rate - 1.0).abs() < 1e-9);
        assert!((features.shift_capacity_rate - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_records_yields_none() {
        let recs: Vec<&ProductionRecord> = Vec::new();
        assert!(compute_features(&recs, 4, 10.0, 1440.0).is_none());
    }
}
