// ==========================================
// Domain layer — entities, value types, no engine logic
// ==========================================

pub mod assignment;
pub mod demand;
pub mod diagnostics;
pub mod machine;
pub mod mold;
pub mod order;
pub mod priority_matrix;
pub mod production;
pub mod sample;
pub mod snapshot;
pub mod stability;
pub mod types;
pub mod weights;

pub use assignment::{Assignment, AssignmentCounters, AssignmentPlan, InvalidItem, InvalidItemsReport};
pub use demand::PendingMoldDemand;
pub use diagnostics::{Diagnostics, Warning};
pub use machine::Machine;
pub use mold::{Mold, MoldSpec};
pub use order::{OrderStatus, PurchaseOrder};
pub use priority_matrix::PriorityMatrix;
pub use production::ProductionRecord;
pub use sample::{PerformanceSample, FEATURE_NAMES};
pub use snapshot::Snapshot;
pub use stability::{StabilityReport, StabilityRow};
pub use types::{
    AssignmentSource, EtaStatus, FeatureTarget, Group, OrderState, PriorityOrder, Scaling, Shift,
    Stage,
};
pub use weights::{FeatureWeightReport, FeatureWeightRow, ModelReliability};
