// DataBudget - app/admin.rs
//
// Admin Editor: a hidden/visible price editing surface over the whole
// offer collection. Edits commit straight to the Offer Store; there is
// no save or cancel step.
//
// The surface is unauthenticated.

use crate::app::store::{OfferStore, PriceUpdate};
use crate::core::input::{parse_price, PriceInput};
use crate::core::model::{Offer, OfferId, Price};

/// One editable line of the admin surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRow {
    pub id: OfferId,
    pub operator: String,
    pub data: String,
    pub validity: String,
    /// Text currently in the price field. Starts as the stored price.
    pub price_text: String,
}

impl From<&Offer> for AdminRow {
    fn from(offer: &Offer) -> Self {
        Self {
            id: offer.id,
            operator: offer.operator.clone(),
            data: offer.data.clone(),
            validity: offer.validity.clone(),
            price_text: offer.price.to_string(),
        }
    }
}

/// Result of committing one price field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The new price was stored and persisted.
    Committed { id: OfferId, price: Price },
    /// The field did not hold a usable price; the stored price is kept.
    InvalidPrice { id: OfferId },
    /// No offer carries this id.
    UnknownOffer { id: OfferId },
}

/// Admin surface state. Starts hidden.
#[derive(Debug, Default)]
pub struct AdminEditor {
    visible: bool,
    rows: Vec<AdminRow>,
}

impl AdminEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the surface and render the current collection.
    pub fn open(&mut self, store: &OfferStore) {
        self.visible = true;
        self.render(store);
        tracing::debug!(rows = self.rows.len(), "Admin panel opened");
    }

    /// Hide the surface. Rows and the store are left as they are.
    pub fn close(&mut self) {
        self.visible = false;
        tracing::debug!("Admin panel closed");
    }

    /// Open when hidden, close when visible.
    pub fn toggle(&mut self, store: &OfferStore) {
        if self.visible {
            self.close();
        } else {
            self.open(store);
        }
    }

    /// Rebuild one row per offer, in collection order, with each price
    /// field pre-filled from the store.
    pub fn render(&mut self, store: &OfferStore) {
        self.rows = store.offers().iter().map(AdminRow::from).collect();
    }

    pub fn rows(&self) -> &[AdminRow] {
        &self.rows
    }

    /// Mutable rows, for binding the price fields to text inputs.
    pub fn rows_mut(&mut self) -> &mut [AdminRow] {
        &mut self.rows
    }

    /// Commit `raw_value` as the new price of offer `id`.
    ///
    /// Text that does not start with a non-negative integer is rejected and
    /// the field is reset to the stored price.
    pub fn on_edit(&mut self, store: &mut OfferStore, id: OfferId, raw_value: &str) -> EditOutcome {
        let price = match parse_price(raw_value) {
            PriceInput::Price(price) => price,
            PriceInput::Invalid => {
                tracing::warn!(id, raw = raw_value, "Rejected non-numeric price edit");
                let stored = store.get(id).map(|o| o.price);
                self.sync_row(id, stored);
                return match stored {
                    Some(_) => EditOutcome::InvalidPrice { id },
                    None => EditOutcome::UnknownOffer { id },
                };
            }
        };

        match store.update_price(id, price) {
            PriceUpdate::Updated { .. } => {
                self.sync_row(id, Some(price));
                EditOutcome::Committed { id, price }
            }
            PriceUpdate::NotFound => EditOutcome::UnknownOffer { id },
        }
    }

    fn sync_row(&mut self, id: OfferId, price: Option<Price>) {
        if let (Some(row), Some(price)) = (self.rows.iter_mut().find(|r| r.id == id), price) {
            row.price_text = price.to_string();
        }
    }
}
