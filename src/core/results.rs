// DataBudget - core/results.rs
//
// Shapes a filtered offer sequence into display records for the results
// panel. The egui layer only draws what this module produces.

use crate::core::model::{format_price, Offer, OfferId};
use crate::util::constants::NO_OFFERS_MESSAGE;

/// One entry in the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferCard {
    pub offer_id: OfferId,
    pub operator: String,
    /// Price with currency suffix.
    pub price_label: String,
    pub data: String,
    pub validity: String,
    /// Set on the cheapest entry only (position 0).
    pub best_value: bool,
}

/// What the results area shows. Replaces the previous view entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// No offer fits the budget.
    Empty { message: &'static str },
    /// Matching offers, cheapest first.
    Listing(Vec<OfferCard>),
}

impl ResultsView {
    /// Number of offer cards (0 for the empty message).
    pub fn len(&self) -> usize {
        match self {
            Self::Empty { .. } => 0,
            Self::Listing(cards) => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the results view from `indices` into `offers`, in order.
pub fn build_view(offers: &[Offer], indices: &[usize]) -> ResultsView {
    let cards: Vec<OfferCard> = indices
        .iter()
        .filter_map(|&idx| offers.get(idx))
        .enumerate()
        .map(|(position, offer)| OfferCard {
            offer_id: offer.id,
            operator: offer.operator.clone(),
            price_label: format_price(offer.price),
            data: offer.data.clone(),
            validity: offer.validity.clone(),
            best_value: position == 0,
        })
        .collect();

    if cards.is_empty() {
        ResultsView::Empty {
            message: NO_OFFERS_MESSAGE,
        }
    } else {
        ResultsView::Listing(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::apply_budget;
    use crate::core::model::default_offers;

    #[test]
    fn test_empty_sequence_renders_message_only() {
        let offers = default_offers();
        let view = build_view(&offers, &[]);
        assert_eq!(
            view,
            ResultsView::Empty {
                message: "Aucune offre disponible."
            }
        );
        assert!(view.is_empty());
    }

    #[test]
    fn test_only_first_card_is_best_value() {
        let offers = default_offers();
        let indices = apply_budget(&offers, 5_000);
        let ResultsView::Listing(cards) = build_view(&offers, &indices) else {
            panic!("expected a listing");
        };
        assert_eq!(cards.len(), 4);
        assert!(cards[0].best_value);
        assert!(cards[1..].iter().all(|c| !c.best_value));
        assert_eq!(cards[0].offer_id, 4);
    }

    #[test]
    fn test_cards_follow_sequence_order_and_carry_labels() {
        let offers = default_offers();
        let indices = apply_budget(&offers, 500);
        let ResultsView::Listing(cards) = build_view(&offers, &indices) else {
            panic!("expected a listing");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].price_label, "200 FCFA");
        assert_eq!(cards[0].data, "300Mo");
        assert_eq!(cards[0].validity, "Unknown");
        assert_eq!(cards[1].offer_id, 1);
        assert_eq!(cards[1].price_label, "500 FCFA");
        assert_eq!(cards[1].validity, "7 jours");
        assert!(!cards[1].best_value);
    }
}
