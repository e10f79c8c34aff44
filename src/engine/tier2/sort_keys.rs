// ==========================================
// Tier-2 mold priority keys (PRIORITY_1/2/3)
// ==========================================

use super::compatibility::CompatibilityMatrix;
use crate::domain::demand::PendingMoldDemand;
use crate::domain::types::PriorityOrder;

/// Sorts `molds` in place by the selected priority order. All three orders
/// are total orders over `(compatibilityCount, leadTime, totalQuantity)`
/// permuted differently, with a final ascending-mold-id tie-break added
/// for full determinism.
pub(super) fn sort_by_priority_order(
    molds: &mut [&PendingMoldDemand],
    compatibility: &CompatibilityMatrix,
    order: PriorityOrder,
) {
    molds.sort_by(|a, b| {
        let ca = compatibility.compatibility_count(&a.mold_id);
        let cb = compatibility.compatibility_count(&b.mold_id);
        let cmp = match order {
            PriorityOrder::Priority1 => ca
                .cmp(&cb)
                .then_with(|| b.lead_time_days.total_cmp(&a.lead_time_days))
                .then_with(|| a.total_quantity.cmp(&b.total_quantity)),
            PriorityOrder::Priority2 => a
                .total_quantity
                .cmp(&b.total_quantity)
                .then_with(|| ca.cmp(&cb))
                .then_with(|| b.lead_time_days.total_cmp(&a.lead_time_days)),
            PriorityOrder::Priority3 => b
                .lead_time_days
                .total_cmp(&a.lead_time_days)
                .then_with(|| a.total_quantity.cmp(&b.total_quantity))
                .then_with(|| ca.cmp(&cb)),
        };
        cmp.then_with(|| a.mold_id.cmp(&b.mold_id))
    });
}
