// DataBudget - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants::{CURRENCY, UNKNOWN_VALIDITY};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Stable identifier of an offer. Unique within a collection.
pub type OfferId = u32;

/// Price in FCFA.
pub type Price = u32;

// =============================================================================
// Offer
// =============================================================================

/// A purchasable mobile data plan.
///
/// This is also the on-disk record shape: the storage slot holds a JSON
/// array of these, field names unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    /// Unique positive identifier, stable across sessions.
    pub id: OfferId,

    /// Network operator name.
    pub operator: String,

    /// Price in FCFA. The only field editable at runtime.
    pub price: Price,

    /// Human-readable data allowance, e.g. "1.5Go".
    pub data: String,

    /// Validity period, or [`UNKNOWN_VALIDITY`].
    pub validity: String,
}

impl Offer {
    /// Build an offer from borrowed labels.
    pub fn new(id: OfferId, operator: &str, price: Price, data: &str, validity: &str) -> Self {
        Self {
            id,
            operator: operator.to_string(),
            price,
            data: data.to_string(),
            validity: validity.to_string(),
        }
    }
}

/// Format a price with its currency suffix, e.g. `"1000 FCFA"`.
pub fn format_price(price: Price) -> String {
    format!("{price} {CURRENCY}")
}

// =============================================================================
// Default collection
// =============================================================================

/// The collection seeded on first run (no persisted collection yet).
pub fn default_offers() -> Vec<Offer> {
    vec![
        Offer::new(1, "Orange", 500, "1.5Go", "7 jours"),
        Offer::new(2, "MTN", 1_000, "3Go", "30 jours"),
        Offer::new(3, "Moov", 2_000, "10Go", "30 jours"),
        Offer::new(4, "Orange", 200, "300Mo", UNKNOWN_VALIDITY),
    ]
}

/// Returns the first id that appears more than once, if any.
pub fn find_duplicate_id(offers: &[Offer]) -> Option<OfferId> {
    let mut seen = HashSet::with_capacity(offers.len());
    offers.iter().map(|o| o.id).find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offers_have_unique_ids() {
        let offers = default_offers();
        assert_eq!(offers.len(), 4);
        assert_eq!(find_duplicate_id(&offers), None);
        let ids: Vec<_> = offers.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_find_duplicate_id() {
        let offers = vec![
            Offer::new(7, "A", 1, "1Go", "1 jour"),
            Offer::new(8, "B", 2, "2Go", "1 jour"),
            Offer::new(7, "C", 3, "3Go", "1 jour"),
        ];
        assert_eq!(find_duplicate_id(&offers), Some(7));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(650), "650 FCFA");
        assert_eq!(format_price(0), "0 FCFA");
    }

    #[test]
    fn test_json_field_names_match_storage_layout() {
        let json = serde_json::to_value(Offer::new(4, "Orange", 200, "300Mo", "Unknown")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 4,
                "operator": "Orange",
                "price": 200,
                "data": "300Mo",
                "validity": "Unknown"
            })
        );
    }
}
