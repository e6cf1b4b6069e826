// DataBudget - core/filter.rs
//
// Budget filter and price ordering for the offer collection.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::Offer;

/// Select the offers affordable within `budget`, cheapest first.
///
/// Returns indices into `offers`. Offers with equal prices keep their
/// collection order (the sort is stable). A negative budget matches nothing.
pub fn apply_budget(offers: &[Offer], budget: i64) -> Vec<usize> {
    let mut matching: Vec<usize> = offers
        .iter()
        .enumerate()
        .filter(|(_, offer)| i64::from(offer.price) <= budget)
        .map(|(idx, _)| idx)
        .collect();

    matching.sort_by_key(|&idx| offers[idx].price);
    matching
}
