// ==========================================
// Per-mold, per-day aggregation of working production records
// ==========================================

use crate::domain::production::ProductionRecord;
use chrono::NaiveDate;
use std::collections::HashMap;

pub(super) struct DayAggregate {
    pub total_mold_shot: i64,
    pub cavities: Vec<i32>,
}

/// Groups working records (`mold_shot > 0`) for one mold by calendar date,
/// summing shot counts within a day and collecting every shift's observed
/// cavity reading. The 8-hour-shift basis is applied once per day-group.
pub(super) fn aggregate_days(records: &[&ProductionRecord]) -> Vec<(NaiveDate, DayAggregate)> {
    let mut by_day: HashMap<NaiveDate, DayAggregate> = HashMap::new();
    for record in records {
        let entry = by_day.entry(record.record_date).or_insert(DayAggregate {
            total_mold_shot: 0,
            cavities: Vec::new(),
        });
        entry.total_mold_shot += record.mold_shot;
        entry.cavities.push(record.observed_cavity);
    }
    let mut days: Vec<(NaiveDate, DayAggregate)> = by_day.into_iter().collect();
    days.sort_by_key(|(date, _)| *date);
    days
}

/// One observed cycle time per day-group (8h basis over the day's summed shots).
pub(super) fn observed_cycles(days: &[(NaiveDate, DayAggregate)]) -> Vec<f64> {
    days.iter()
        .filter(|(_, agg)| agg.total_mold_shot > 0)
        .map(|(_, agg)| 28_800.0 / agg.total_mold_shot as f64)
        .collect()
}

/// All raw per-shift observed-cavity readings, flattened across days.
pub(super) fn observed_cavities(days: &[(NaiveDate, DayAggregate)]) -> Vec<i32> {
    days.iter().flat_map(|(_, agg)| agg.cavities.iter().copied()).collect()
}
