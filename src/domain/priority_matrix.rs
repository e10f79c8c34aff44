// ==========================================
// PriorityMatrix — mold x machine compatibility/rank matrix
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dense rank matrix: `ranks[mold_id][machine_code] = rank`, where rank 0
/// means "incompatible / unseen" and rank >= 1 is a dense priority within
/// that mold's row (lower is better).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PriorityMatrix {
    rows: HashMap<String, HashMap<String, u32>>,
}

impl PriorityMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rank(&mut self, mold_id: &str, machine_code: &str, rank: u32) {
        self.rows
            .entry(mold_id.to_string())
            .or_default()
            .insert(machine_code.to_string(), rank);
    }

    pub fn rank(&self, mold_id: &str, machine_code: &str) -> u32 {
        self.rows
            .get(mold_id)
            .and_then(|row| row.get(machine_code))
            .copied()
            .unwrap_or(0)
    }

    /// Nonzero (machine_code, rank) pairs for a mold, ascending by rank.
    pub fn row(&self, mold_id: &str) -> Vec<(String, u32)> {
        let mut entries: Vec<(String, u32)> = self
            .rows
            .get(mold_id)
            .map(|row| {
                row.iter()
                    .filter(|(_, &rank)| rank > 0)
                    .map(|(code, &rank)| (code.clone(), rank))
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    pub fn has_row(&self, mold_id: &str) -> bool {
        self.rows.contains_key(mold_id)
    }

    pub fn mold_ids(&self) -> Vec<String> {
        self.rows.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.values().all(|row| row.values().all(|&r| r == 0)) || self.rows.is_empty()
    }
}
