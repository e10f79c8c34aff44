// ==========================================
// Performance Aggregator & Good/Bad Classifier
// ==========================================
// Splits completed purchase orders into good/bad groups by comparing
// actual shift usage against an efficiency-adjusted estimate, then
// computes the four per-(PO, mold, machine) features the Feature Weight
// Engine consumes.
// ==========================================

mod classification;
mod features;

use crate::config::EngineConfig;
use crate::domain::diagnostics::{Diagnostics, Warning};
use crate::domain::production::ProductionRecord;
use crate::domain::sample::PerformanceSample;
use crate::domain::snapshot::Snapshot;
use crate::domain::stability::StabilityReport;
use crate::domain::types::{OrderState, Stage};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct PerformanceAggregator;

#[derive(Debug, Default)]
pub struct GoodBadSamples {
    pub good: Vec<PerformanceSample>,
    pub bad: Vec<PerformanceSample>,
}

impl PerformanceAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_samples(
        &self,
        snapshot: &Snapshot,
        stability: &StabilityReport,
        config: &EngineConfig,
        diagnostics: &mut Diagnostics,
    ) -> GoodBadSamples {
        let mut result = GoodBadSamples::default();

        let mut completed = Vec::new();
        for status in &snapshot.order_statuses {
            if status.state == OrderState::Molded && status.item_remain != 0 {
                diagnostics.push_warning(
                    Warning::new(
                        Stage::PerformanceAggregation,
                        "inconsistent_order_reference",
                        "state is Molded but item_remain != 0",
                    )
                    .with_po(status.po_no.clone()),
                );
                continue;
            }
            if status.is_completed() {
                completed.push(status);
            }
        }
        debug!(completed = completed.len(), "performance aggregator: starting");

        for status in completed {
            let Some(po) = snapshot.purchase_order(&status.po_no) else {
                diagnostics.push_invalid(Stage::PerformanceAggregation, status.po_no.clone(), "missing_purchase_order");
                continue;
            };
            let Some(mold_id) = status.last_mold_id.as_deref() else {
                diagnostics.push_invalid(Stage::PerformanceAggregation, status.po_no.clone(), "missing_mold_reference");
                continue;
            };
            let Some(mold) = snapshot.mold_by_id(mold_id) else {
                diagnostics.push_invalid(Stage::PerformanceAggregation, status.po_no.clone(), "mold_not_in_master_data");
                continue;
            };
            if !mold.is_structurally_valid() {
                diagnostics.push_invalid(Stage::PerformanceAggregation, status.po_no.clone(), "invalid_mold_master_data");
                continue;
            }
            let Some(stability_row) = stability.get(mold_id) else {
                diagnostics.push_invalid(Stage::PerformanceAggregation, status.po_no.clone(), "missing_stability_row");
                continue;
            };

            let po_records: Vec<&ProductionRecord> = snapshot
                .production_records
                .iter()
                .filter(|r| r.po_no == status.po_no && r.mold_id == mold_id)
                .collect();
            if po_records.is_empty() {
                diagnostics.push_invalid(Stage::PerformanceAggregation, status.po_no.clone(), "no_production_records");
                continue;
            }

            let estimated_shift_used = classification::mold_estimated_shift_used(
                po.item_quantity,
                mold.cavity_standard,
                mold.setting_cycle_seconds,
                config.efficiency,
                config.loss,
            );
            let actual_shift_used = classification::actual_shifts_used(&po_records);
            let group = classification::classify(actual_shift_used, estimated_shift_used);

            // BTreeMap keeps iteration order tied to machine_code rather than
            // std HashMap's randomized per-process seed, so push order into
            // result.good/result.bad (and downstream bootstrap resampling)
            // stays identical across runs for a PO spanning multiple machines.
            let by_machine: BTreeMap<String, Vec<&ProductionRecord>> = {
                let mut map: BTreeMap<String, Vec<&ProductionRecord>> = BTreeMap::new();
                for record in &po_records {
                    let Some(machine) = snapshot.machine_by_id(&record.machine_id) else {
                        diagnostics.push_warning(
                            Warning::new(
                                Stage::PerformanceAggregation,
                                "machine_not_in_master_data",
                                "production record references an unknown machine",
                            )
                            .with_machine(record.machine_id.clone())
                            .with_po(record.po_no.clone()),
                        );
                        continue;
                    };
                    map.entry(machine.machine_code.clone()).or_default().push(record);
                }
                map
            };

            for (machine_code, recs) in by_machine {
                let Some(f) = features::compute_features(
                    &recs,
                    mold.cavity_standard,
                    mold.setting_cycle_seconds,
                    stability_row.balanced_capacity,
                ) else {
                    continue;
                };

                let sample = PerformanceSample {
                    mold_id: mold_id.to_string(),
                    machine_code,
                    po_no: status.po_no.clone(),
                    shift_ng_rate: f.shift_ng_rate,
                    shift_cavity_rate: f.shift_cavity_rate,
                    shift_cycle_time_rate: f.shift_cycle_time_rate,
                    shift_capacity_rate: f.shift_capacity_rate,
                    group,
                };

                match group {
                    crate::domain::types::Group::Good => result.good.push(sample),
                    crate::domain::types::Group::Bad => result.bad.push(sample),
                }
            }
        }

        debug!(good = result.good.len(), bad = result.bad.len(), "performance aggregator: complete");
        result
    }
}
