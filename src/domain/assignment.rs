// ==========================================
// Assignment / AssignmentPlan — final optimizer output
// ==========================================

use crate::domain::types::{AssignmentSource, Stage};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub po_no: String,
    pub mold_id: String,
    pub machine_code: String,
    pub priority_in_machine: u32,
    pub source: AssignmentSource,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InvalidItem {
    pub key: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InvalidItemsReport {
    pub by_stage: HashMap<Stage, Vec<InvalidItem>>,
}

impl InvalidItemsReport {
    pub fn push(&mut self, stage: Stage, key: impl Into<String>, reason: impl Into<String>) {
        self.by_stage.entry(stage).or_default().push(InvalidItem {
            key: key.into(),
            reason: reason.into(),
        });
    }

    pub fn count(&self, stage: Stage) -> usize {
        self.by_stage.get(&stage).map(|v| v.len()).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssignmentCounters {
    pub total_pending: usize,
    pub assigned_tier1: usize,
    pub assigned_tier2: usize,
    pub unassigned: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssignmentPlan {
    pub assignments: Vec<Assignment>,
    pub unassigned_molds: Vec<String>,
    pub counters: AssignmentCounters,
}

impl AssignmentPlan {
    /// Final ordering guarantee: (machineCode asc, priorityInMachine asc).
    pub fn sort_canonical(&mut self) {
        self.assignments.sort_by(|a, b| {
            a.machine_code
                .cmp(&b.machine_code)
                .then_with(|| a.priority_in_machine.cmp(&b.priority_in_machine))
        });
    }

    /// No two assignments may share (machine_code, priority_in_machine).
    pub fn has_duplicate_slots(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        for a in &self.assignments {
            if !seen.insert((a.machine_code.clone(), a.priority_in_machine)) {
                return true;
            }
        }
        false
    }
}
