// ==========================================
// CompatibilityMatrix — tonnage-based mold/machine compatibility
// ==========================================

use crate::domain::machine::Machine;
use crate::domain::mold::MoldSpec;
use std::collections::HashMap;

/// `C[mold, machineCode] in {0, 1}`, built from `MoldSpec` restricted to
/// active machines. Unlike the `PriorityMatrix`, this carries no ranking —
/// only a yes/no compatibility fact.
#[derive(Debug, Default)]
pub struct CompatibilityMatrix {
    by_mold: HashMap<String, Vec<String>>,
}

impl CompatibilityMatrix {
    pub fn build(mold_specs: &[MoldSpec], machines: &[Machine]) -> Self {
        let active: std::collections::HashSet<&str> = machines
            .iter()
            .filter(|m| m.active_flag)
            .map(|m| m.machine_code.as_str())
            .collect();

        let mut by_mold = HashMap::new();
        for spec in mold_specs {
            let mut codes: Vec<String> = spec
                .compatible_machine_codes
                .iter()
                .filter(|code| active.contains(code.as_str()))
                .cloned()
                .collect();
            codes.sort();
            by_mold.insert(spec.mold_id.clone(), codes);
        }
        Self { by_mold }
    }

    pub fn compatible_machines(&self, mold_id: &str) -> &[String] {
        self.by_mold.get(mold_id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn compatibility_count(&self, mold_id: &str) -> usize {
        self.compatible_machines(mold_id).len()
    }
}
