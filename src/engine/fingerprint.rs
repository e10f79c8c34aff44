// ==========================================
// Snapshot fingerprinting — orchestrator short-circuit support
// ==========================================
// A SHA-256 digest over a canonical, sorted-by-primary-key encoding of the
// frames that feed the engines. Row order in the inbound snapshot never
// affects the result. Persistence of the fingerprint is the caller's
// concern; this module only computes and compares values it is given.
// ==========================================

use crate::domain::snapshot::Snapshot;
use sha2::{Digest, Sha256};

pub type SnapshotFingerprint = String;

pub fn fingerprint_snapshot(snapshot: &Snapshot) -> SnapshotFingerprint {
    let mut hasher = Sha256::new();

    let mut molds: Vec<String> = snapshot
        .molds
        .iter()
        .map(|m| format!("{}|{}|{}|{}|{}", m.mold_id, m.cavity_standard, m.setting_cycle_seconds, m.tonnage_range.0, m.tonnage_range.1))
        .collect();
    molds.sort();
    hash_section(&mut hasher, "molds", &molds);

    let mut machines: Vec<String> = snapshot
        .machines
        .iter()
        .map(|m| format!("{}|{}|{}|{}", m.machine_id, m.machine_code, m.tonnage, m.active_flag))
        .collect();
    machines.sort();
    hash_section(&mut hasher, "machines", &machines);

    let mut specs: Vec<String> = snapshot
        .mold_specs
        .iter()
        .map(|s| {
            let mut codes: Vec<&str> = s.compatible_machine_codes.iter().map(|c| c.as_str()).collect();
            codes.sort();
            format!("{}|{}", s.mold_id, codes.join(","))
        })
        .collect();
    specs.sort();
    hash_section(&mut hasher, "mold_specs", &specs);

    let mut records: Vec<String> = snapshot
        .production_records
        .iter()
        .map(|r| {
            format!(
                "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
                r.record_date, r.shift_id, r.machine_id, r.mold_id, r.item_code, r.po_no,
                r.mold_shot, r.item_good_qty, r.item_defect_qty, r.observed_cavity
            )
        })
        .collect();
    records.sort();
    hash_section(&mut hasher, "production_records", &records);

    let mut orders: Vec<String> = snapshot
        .purchase_orders
        .iter()
        .map(|p| {
            format!(
                "{}|{}|{}|{}|{:?}|{:?}",
                p.po_no, p.item_code, p.item_name, p.item_quantity, p.po_eta, p.po_received_date
            )
        })
        .collect();
    orders.sort();
    hash_section(&mut hasher, "purchase_orders", &orders);

    let mut statuses: Vec<String> = snapshot
        .order_statuses
        .iter()
        .map(|s| {
            format!(
                "{}|{}|{}|{}|{:?}|{:?}|{:?}|{:?}",
                s.po_no, s.state, s.item_remain, s.eta_status, s.last_machine_id, s.last_mold_id,
                s.started_date, s.end_date
            )
        })
        .collect();
    statuses.sort();
    hash_section(&mut hasher, "order_statuses", &statuses);

    format!("{:x}", hasher.finalize())
}

fn hash_section(hasher: &mut Sha256, name: &str, rows: &[String]) {
    hasher.update(name.as_bytes());
    hasher.update([0u8]);
    for row in rows {
        hasher.update(row.as_bytes());
        hasher.update([0u8]);
    }
    hasher.update([0xffu8]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_snapshots_yield_identical_fingerprints() {
        let snapshot = Snapshot::default();
        assert_eq!(fingerprint_snapshot(&snapshot), fingerprint_snapshot(&snapshot));
    }

    #[test]
    fn row_order_does_not_affect_fingerprint() {
        use crate::domain::machine::Machine;
        let a = Snapshot {
            machines: vec![
                Machine { machine_id: "1".into(), machine_code: "K1".into(), tonnage: 100.0, active_flag: true },
                Machine { machine_id: "2".into(), machine_code: "K2".into(), tonnage: 150.0, active_flag: true },
            ],
            ..Default::default()
        };
        let b = Snapshot {
            machines: vec![
                Machine { machine_id: "2".into(), machine_code: "K2".into(), tonnage: 150.0, active_flag: true },
                Machine { machine_id: "1".into(), machine_code: "K1".into(), tonnage: 100.0, active_flag: true },
            ],
            ..Default::default()
        };
        assert_eq!(fingerprint_snapshot(&a), fingerprint_snapshot(&b));
    }

    #[test]
    fn different_content_yields_different_fingerprint() {
        use crate::domain::machine::Machine;
        let a = Snapshot::default();
        let b = Snapshot {
            machines: vec![Machine { machine_id: "1".into(), machine_code: "K1".into(), tonnage: 100.0, active_flag: true }],
            ..Default::default()
        };
        assert_ne!(fingerprint_snapshot(&a), fingerprint_snapshot(&b));
    }
}
