// ==========================================
// Engine layer — pure (Snapshot, EngineConfig) -> artifact functions
// ==========================================
// Every engine is independently constructible and callable with no hidden
// global state; the orchestrator only sequences them in dependency order.
// ==========================================

pub mod demand;
pub mod feature_weight;
pub mod fingerprint;
pub mod orchestrator;
pub mod performance;
pub mod priority_matrix;
pub mod stability;
pub mod tier1;
pub mod tier2;

pub use demand::DemandEngine;
pub use feature_weight::FeatureWeightEngine;
pub use fingerprint::{fingerprint_snapshot, SnapshotFingerprint};
pub use orchestrator::{CoreRunOutcome, CoreRunResult, Orchestrator};
pub use performance::{GoodBadSamples, PerformanceAggregator};
pub use priority_matrix::PriorityMatrixEngine;
pub use stability::StabilityEngine;
pub use tier1::{Tier1Optimizer, Tier1Result};
pub use tier2::{CompatibilityMatrix, Tier2Optimizer, Tier2Result};
