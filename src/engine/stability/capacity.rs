// ==========================================
// Capacity estimates and trust coefficient
// ==========================================

pub(super) struct Capacities {
    pub theoretical: f64,
    pub effective: f64,
    pub estimated: f64,
    pub balanced: f64,
    pub trust_coefficient: f64,
    pub overall_stability: f64,
}

/// `theoreticalCapacity = (3600 / settingCycleSeconds) * cavityStandard`.
pub(super) fn theoretical_capacity(setting_cycle_seconds: f64, cavity_standard: i32) -> f64 {
    (3600.0 / setting_cycle_seconds) * cavity_standard as f64
}

/// `alpha = clamp(totalRecords / threshold, 0.1, 1.0)`.
pub(super) fn trust_coefficient(total_records: i64, threshold: i64) -> f64 {
    if threshold <= 0 {
        return 1.0;
    }
    (total_records as f64 / threshold as f64).min(1.0).max(0.1)
}

pub(super) fn compute_capacities(
    setting_cycle_seconds: f64,
    cavity_standard: i32,
    cavity_stability_index: f64,
    cycle_stability_index: f64,
    efficiency: f64,
    loss: f64,
    total_records: i64,
    threshold: i64,
) -> Capacities {
    let theoretical = theoretical_capacity(setting_cycle_seconds, cavity_standard);
    let overall_stability = 0.6 * cavity_stability_index + 0.4 * cycle_stability_index;
    let effective = theoretical * overall_stability;
    let estimated = theoretical * (efficiency - loss);
    let alpha = trust_coefficient(total_records, threshold);
    let balanced = alpha * effective + (1.0 - alpha) * estimated;

    Capacities {
        theoretical,
        effective,
        estimated,
        balanced,
        trust_coefficient: alpha,
        overall_stability,
    }
}
