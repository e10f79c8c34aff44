// ==========================================
// Diagnostics — shared warning accumulator
// ==========================================
// Formalizes "warnings flow through every downstream engine untouched"
// into a concrete type, threaded by `&mut` through every engine call rather
// than ad-hoc Vec<String> or per-engine return values.
// ==========================================

use crate::domain::types::Stage;
use serde::{Deserialize, Serialize};

/// A single non-fatal diagnostic: InconsistentReference, OptimizationInfeasible,
/// NumericEdgeCase, or a degraded InsufficientData.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub stage: Stage,
    pub code: String,
    pub message: String,
    pub mold_id: Option<String>,
    pub machine_code: Option<String>,
    pub po_no: Option<String>,
}

impl Warning {
    pub fn new(stage: Stage, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            stage,
            code: code.into(),
            message: message.into(),
            mold_id: None,
            po_no: None,
            machine_code: None,
        }
    }

    pub fn with_mold(mut self, mold_id: impl Into<String>) -> Self {
        self.mold_id = Some(mold_id.into());
        self
    }

    pub fn with_machine(mut self, machine_code: impl Into<String>) -> Self {
        self.machine_code = Some(machine_code.into());
        self
    }

    pub fn with_po(mut self, po_no: impl Into<String>) -> Self {
        self.po_no = Some(po_no.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub warnings: Vec<Warning>,
    pub invalid: crate::domain::assignment::InvalidItemsReport,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn push_invalid(&mut self, stage: Stage, key: impl Into<String>, reason: impl Into<String>) {
        self.invalid.push(stage, key, reason);
    }
}
