// ==========================================
// mold-plan-core
// ==========================================
// Manufacturing planning core for plastic injection molding: scores mold
// reliability from shift history, learns feature weights separating good
// and bad production episodes, builds a mold x machine priority matrix,
// and assigns pending purchase orders with a two-tier optimizer
// (history-first, compatibility-fallback). Batch-only, single invocation
// per snapshot; see DESIGN.md for grounding and open-question decisions.
// ==========================================

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod logging;
pub mod stats;

pub use config::EngineConfig;
pub use domain::{
    Assignment, AssignmentCounters, AssignmentPlan, Diagnostics, FeatureWeightReport,
    FeatureWeightRow, InvalidItem, InvalidItemsReport, Machine, ModelReliability, Mold, MoldSpec,
    OrderState, OrderStatus, PendingMoldDemand, PerformanceSample, PriorityMatrix,
    ProductionRecord, PurchaseOrder, Snapshot, StabilityReport, StabilityRow, Warning,
};
pub use engine::{
    fingerprint_snapshot, CoreRunOutcome, CoreRunResult, DemandEngine, FeatureWeightEngine,
    GoodBadSamples, Orchestrator, PerformanceAggregator, PriorityMatrixEngine, SnapshotFingerprint,
    StabilityEngine, Tier1Optimizer, Tier1Result, Tier2Optimizer, Tier2Result,
};
pub use error::{CoreError, CoreResult};

/// Convenience entry point: runs every engine in dependency order and
/// returns the full artifact bundle (stability, feature weights, priority
/// matrix, demand, and the resulting assignment plan).
pub fn run_core(snapshot: &Snapshot, config: &EngineConfig) -> CoreRunOutcome {
    Orchestrator::new().run(snapshot, config)
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
