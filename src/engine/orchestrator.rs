// ==========================================
// Orchestrator — runs all six engines in dependency order
// ==========================================
// Accepts one Snapshot and one EngineConfig, validates config, computes a
// fingerprint for short-circuit reuse of prior Stability/FeatureWeight
// outputs, then runs Stability -> PerformanceAggregator -> FeatureWeight
// -> PriorityMatrix -> Tier1 -> Tier2, accumulating diagnostics throughout.
// ==========================================

use crate::config::EngineConfig;
use crate::domain::assignment::{AssignmentCounters, AssignmentPlan};
use crate::domain::diagnostics::{Diagnostics, Warning};
use crate::domain::priority_matrix::PriorityMatrix;
use crate::domain::snapshot::Snapshot;
use crate::domain::stability::StabilityReport;
use crate::domain::types::Stage;
use crate::domain::weights::FeatureWeightReport;
use crate::engine::demand::DemandEngine;
use crate::engine::feature_weight::FeatureWeightEngine;
use crate::engine::fingerprint::{fingerprint_snapshot, SnapshotFingerprint};
use crate::engine::performance::PerformanceAggregator;
use crate::engine::priority_matrix::PriorityMatrixEngine;
use crate::engine::stability::StabilityEngine;
use crate::engine::tier1::Tier1Optimizer;
use crate::engine::tier2::{CompatibilityMatrix, Tier2Optimizer};
use crate::error::CoreError;
use tracing::info;

/// The orchestrator's full successful output bundle.
#[derive(Debug, Clone)]
pub struct CoreRunResult {
    pub stability: StabilityReport,
    pub feature_weights: FeatureWeightReport,
    pub priority_matrix: PriorityMatrix,
    pub assignment_plan: AssignmentPlan,
    pub diagnostics: Diagnostics,
    pub fingerprint: SnapshotFingerprint,
    pub reused_prior_outputs: bool,
}

pub type CoreRunOutcome = Result<CoreRunResult, CoreError>;

#[derive(Debug, Default)]
pub struct Orchestrator;

impl Orchestrator {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, snapshot: &Snapshot, config: &EngineConfig) -> CoreRunOutcome {
        config.validate()?;

        let mut diagnostics = Diagnostics::new();
        let fingerprint = fingerprint_snapshot(snapshot);

        let short_circuit = !config.regenerate
            && snapshot.prior_fingerprint.as_deref() == Some(fingerprint.as_str())
            && snapshot.prior_stability.is_some()
            && snapshot.prior_feature_weights.is_some();

        let (stability, feature_weights) = if short_circuit {
            info!("orchestrator: fingerprint matched prior run, reusing cached stability/feature-weight outputs");
            (
                snapshot.prior_stability.clone().expect("checked above"),
                snapshot.prior_feature_weights.clone().expect("checked above"),
            )
        } else {
            let stability = StabilityEngine::new().compute_report(snapshot, config, &mut diagnostics);

            let samples = PerformanceAggregator::new().compute_samples(snapshot, &stability, config, &mut diagnostics);

            let feature_weights =
                FeatureWeightEngine::new().compute_report(&samples.good, &samples.bad, config, &mut diagnostics)?;

            (stability, feature_weights)
        };

        // PriorityMatrix always needs the good-group samples; recompute them
        // even on a short-circuited stability/weights path since the good
        // sample set itself isn't part of the cached, fingerprint-keyed
        // outputs (only Stability/FeatureWeight reports are reusable).
        let samples = PerformanceAggregator::new().compute_samples(snapshot, &stability, config, &mut diagnostics);
        let priority_matrix = PriorityMatrixEngine::new().compute_matrix(&samples.good, &feature_weights);

        let demand_engine = DemandEngine::new();
        let item_mold_map = demand_engine.resolve_item_mold_map(snapshot);
        let demands = demand_engine.pending_mold_demand(snapshot, &stability, &item_mold_map, &mut diagnostics);
        let initial_load = demand_engine.machine_load(snapshot, &stability, &mut diagnostics);

        let total_pending = demands.len();

        let tier1_result = Tier1Optimizer::new().optimize(
            &demands,
            &priority_matrix,
            &initial_load,
            config.max_load_threshold,
            &mut diagnostics,
        );

        let remaining_demands: Vec<_> = demands
            .iter()
            .filter(|d| tier1_result.unassigned_molds.contains(&d.mold_id))
            .cloned()
            .collect();

        let compatibility = CompatibilityMatrix::build(&snapshot.mold_specs, &snapshot.machines);
        let tier2_result = Tier2Optimizer::new().optimize(
            &remaining_demands,
            &compatibility,
            &tier1_result.machine_load,
            config.max_load_threshold,
            config.priority_order,
            &tier1_result.max_priority_per_machine,
            &mut diagnostics,
        );

        for mold_id in &tier2_result.unassigned_molds {
            diagnostics.push_warning(
                Warning::new(Stage::Tier2, "optimization_infeasible", "mold could not be placed by either tier")
                    .with_mold(mold_id.clone()),
            );
        }

        let mut assignment_plan = AssignmentPlan {
            assignments: tier1_result
                .assignments
                .into_iter()
                .chain(tier2_result.assignments.into_iter())
                .collect(),
            unassigned_molds: tier2_result.unassigned_molds.clone(),
            counters: AssignmentCounters {
                total_pending,
                assigned_tier1: tier1_result.assigned_molds.len(),
                assigned_tier2: remaining_demands.len() - tier2_result.unassigned_molds.len(),
                unassigned: tier2_result.unassigned_molds.len(),
            },
        };
        assignment_plan.sort_canonical();

        debug_assert!(!assignment_plan.has_duplicate_slots(), "assignment plan produced duplicate machine slots");

        info!(
            total_pending = assignment_plan.counters.total_pending,
            assigned_tier1 = assignment_plan.counters.assigned_tier1,
            assigned_tier2 = assignment_plan.counters.assigned_tier2,
            unassigned = assignment_plan.counters.unassigned,
            "orchestrator: run complete"
        );

        Ok(CoreRunResult {
            stability,
            feature_weights,
            priority_matrix,
            assignment_plan,
            diagnostics,
            fingerprint,
            reused_prior_outputs: short_circuit,
        })
    }
}

