// ==========================================
// Stability Index Engine
// ==========================================
// Derives per-mold cavity/cycle stability indices and four capacity
// estimates from shift-level production history. Pure function of
// (Snapshot, EngineConfig) -> StabilityReport; no hidden state.
// ==========================================

mod aggregation;
mod capacity;
mod indices;
#[cfg(test)]
mod tests;

use crate::config::EngineConfig;
use crate::domain::diagnostics::Diagnostics;
use crate::domain::snapshot::Snapshot;
use crate::domain::stability::{StabilityReport, StabilityRow};
use crate::domain::types::Stage;
use crate::error::{CoreError, CoreResult};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct StabilityEngine;

impl StabilityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Computes a StabilityRow for every structurally-valid mold that has
    /// at least one working production record, and records every mold
    /// excluded (invalid master data, or zero working records) into
    /// `diagnostics`.
    pub fn compute_report(
        &self,
        snapshot: &Snapshot,
        config: &EngineConfig,
        diagnostics: &mut Diagnostics,
    ) -> StabilityReport {
        debug!(molds = snapshot.molds.len(), "stability engine: starting batch run");

        let mut rows = Vec::new();
        for mold in &snapshot.molds {
            if !mold.is_structurally_valid() {
                diagnostics.push_invalid(Stage::Stability, mold.mold_id.clone(), "invalid_setting_cycle_or_cavity_standard");
                continue;
            }

            let working: Vec<&crate::domain::production::ProductionRecord> = snapshot
                .production_records
                .iter()
                .filter(|r| r.mold_id == mold.mold_id && r.is_working())
                .collect();

            if working.is_empty() {
                diagnostics.push_warning(
                    crate::domain::diagnostics::Warning::new(
                        Stage::Stability,
                        "insufficient_data",
                        "no working production records for mold",
                    )
                    .with_mold(mold.mold_id.clone()),
                );
                continue;
            }

            match self.compute_row(mold, &working, config) {
                Ok(row) => rows.push(row),
                Err(_) => {
                    diagnostics.push_invalid(Stage::Stability, mold.mold_id.clone(), "capacity_computation_failed");
                }
            }
        }

        debug!(rows = rows.len(), "stability engine: batch run complete");
        StabilityReport { rows }
    }

    /// Single-mold query entry point: fails hard with `InsufficientData`
    /// rather than degrading.
    pub fn compute_single_mold(
        &self,
        mold_id: &str,
        snapshot: &Snapshot,
        config: &EngineConfig,
    ) -> CoreResult<StabilityRow> {
        let mold = snapshot
            .mold_by_id(mold_id)
            .ok_or_else(|| CoreError::InsufficientData(format!("unknown mold {mold_id}")))?;

        if !mold.is_structurally_valid() {
            return Err(CoreError::InvalidConfig(format!(
                "mold {mold_id} has non-positive cavity_standard or setting_cycle_seconds"
            )));
        }

        let working: Vec<&crate::domain::production::ProductionRecord> = snapshot
            .production_records
            .iter()
            .filter(|r| r.mold_id == mold.mold_id && r.is_working())
            .collect();

        if working.is_empty() {
            return Err(CoreError::InsufficientData(format!(
                "mold {mold_id} has zero working production records"
            )));
        }

        self.compute_row(mold, &working, config)
            .map_err(|e| CoreError::InsufficientData(e.to_string()))
    }

    fn compute_row(
        &self,
        mold: &crate::domain::mold::Mold,
        working: &[&crate::domain::production::ProductionRecord],
        config: &EngineConfig,
    ) -> Result<StabilityRow, anyhow::Error> {
        let days = aggregation::aggregate_days(working);
        let cycles = aggregation::observed_cycles(&days);
        let cavities = aggregation::observed_cavities(&days);

        let total_records = working.len() as i64;
        let threshold = config.total_records_threshold;

        let cavity_idx = indices::cavity_stability_index(
            &cavities,
            mold.cavity_standard,
            total_records,
            threshold,
        );
        let cycle_idx = indices::cycle_stability_index(
            &cycles,
            mold.setting_cycle_seconds,
            total_records,
            threshold,
        );

        if !(0.0..=1.0).contains(&cavity_idx) || !(0.0..=1.0).contains(&cycle_idx) {
            warn!(mold_id = %mold.mold_id, cavity_idx, cycle_idx, "stability index out of [0,1] bounds");
        }

        let caps = capacity::compute_capacities(
            mold.setting_cycle_seconds,
            mold.cavity_standard,
            cavity_idx,
            cycle_idx,
            config.efficiency,
            config.loss,
            total_records,
            threshold,
        );

        Ok(StabilityRow {
            mold_id: mold.mold_id.clone(),
            cavity_stability_index: cavity_idx,
            cycle_stability_index: cycle_idx,
            overall_stability: caps.overall_stability,
            theoretical_capacity: caps.theoretical,
            effective_capacity: caps.effective,
            estimated_capacity: caps.estimated,
            balanced_capacity: caps.balanced,
            trust_coefficient: caps.trust_coefficient,
            total_records,
        })
    }
}
