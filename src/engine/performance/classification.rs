// ==========================================
// Expected-shift derivation and good/bad classification
// ==========================================

use crate::domain::production::ProductionRecord;
use crate::domain::types::{Group, Shift};
use chrono::NaiveDate;
use std::collections::HashSet;

const SECONDS_PER_SHIFT: f64 = 8.0 * 3600.0;
const EPSILON: f64 = 1e-9;

/// `moldEstimatedShiftUsed`, derived from a completed PO's item quantity and
/// the mold's nominal cycle, inflated by the configured efficiency/loss gap.
pub(super) fn mold_estimated_shift_used(
    item_quantity: i64,
    cavity_standard: i32,
    setting_cycle_seconds: f64,
    efficiency: f64,
    loss: f64,
) -> f64 {
    if cavity_standard <= 0 {
        return 0.0;
    }
    let full_total_shots = item_quantity as f64 / cavity_standard as f64;
    let full_total_seconds = full_total_shots * setting_cycle_seconds;
    let full_shift_used = full_total_seconds / SECONDS_PER_SHIFT;
    full_shift_used / (efficiency - loss).max(EPSILON)
}

/// Count of distinct (recordDate, shift) tuples across the PO's working
/// production records.
pub(super) fn actual_shifts_used(records: &[&ProductionRecord]) -> usize {
    let distinct: HashSet<(NaiveDate, Shift)> = records
        .iter()
        .filter(|r| r.is_working())
        .map(|r| (r.record_date, r.shift_id))
        .collect();
    distinct.len()
}

pub(super) fn classify(actual_shifts_used: usize, estimated_shift_used: f64) -> Group {
    if (actual_shifts_used as f64) <= estimated_shift_used {
        Group::Good
    } else {
        Group::Bad
    }
}
