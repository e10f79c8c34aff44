// ==========================================
// Shared domain enumerations
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Shift — labeled production time block
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Shift {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
    /// Administrative / holding-company shift, not a production window.
    Hc,
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::First => write!(f, "1"),
            Shift::Second => write!(f, "2"),
            Shift::Third => write!(f, "3"),
            Shift::Hc => write!(f, "HC"),
        }
    }
}

// ==========================================
// OrderState — purchase order lifecycle
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    Pending,
    Molding,
    Paused,
    Molded,
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderState::Pending => write!(f, "PENDING"),
            OrderState::Molding => write!(f, "MOLDING"),
            OrderState::Paused => write!(f, "PAUSED"),
            OrderState::Molded => write!(f, "MOLDED"),
        }
    }
}

// ==========================================
// EtaStatus — delivery timing status
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EtaStatus {
    Pending,
    Ontime,
    Late,
}

impl fmt::Display for EtaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtaStatus::Pending => write!(f, "PENDING"),
            EtaStatus::Ontime => write!(f, "ONTIME"),
            EtaStatus::Late => write!(f, "LATE"),
        }
    }
}

// ==========================================
// Group — good/bad classification of a completed PO
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Good,
    Bad,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Good => write!(f, "good"),
            Group::Bad => write!(f, "bad"),
        }
    }
}

// ==========================================
// AssignmentSource — which tier placed a PO
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssignmentSource {
    HistBased,
    CompatibilityBased,
}

impl fmt::Display for AssignmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentSource::HistBased => write!(f, "histBased"),
            AssignmentSource::CompatibilityBased => write!(f, "compatibilityBased"),
        }
    }
}

// ==========================================
// PriorityOrder — Tier-2 mold sort key selector
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityOrder {
    Priority1,
    Priority2,
    Priority3,
}

impl fmt::Display for PriorityOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityOrder::Priority1 => write!(f, "PRIORITY_1"),
            PriorityOrder::Priority2 => write!(f, "PRIORITY_2"),
            PriorityOrder::Priority3 => write!(f, "PRIORITY_3"),
        }
    }
}

// ==========================================
// FeatureTarget — target semantics for a performance feature
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureTarget {
    Minimize,
    Value(f64),
}

// ==========================================
// Scaling — traditional-weight scaling mode
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scaling {
    Absolute,
    Relative,
}

// ==========================================
// Stage — pipeline stage name, used as the InvalidItemsReport key
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Stability,
    PerformanceAggregation,
    FeatureWeight,
    PriorityMatrix,
    Tier1,
    Tier2,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Stability => write!(f, "stability"),
            Stage::PerformanceAggregation => write!(f, "performance_aggregation"),
            Stage::FeatureWeight => write!(f, "feature_weight"),
            Stage::PriorityMatrix => write!(f, "priority_matrix"),
            Stage::Tier1 => write!(f, "tier1"),
            Stage::Tier2 => write!(f, "tier2"),
        }
    }
}
