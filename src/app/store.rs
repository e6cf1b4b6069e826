// DataBudget - app/store.rs
//
// Offer Store: the in-memory offer collection mirrored to a single JSON
// storage slot (`offers.json` in the platform data directory).
//
// Design principles:
// - The slot is written atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good collection.
// - Load errors are never surfaced: a missing, unreadable, malformed or
//   inconsistent slot falls back to the default collection.
// - The full collection is rewritten after every mutation.

use crate::core::model::{default_offers, find_duplicate_id, Offer, OfferId, Price};
use crate::util::constants::OFFERS_FILE_NAME;
use crate::util::error::StoreError;
use std::path::{Path, PathBuf};

/// Result of [`OfferStore::update_price`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceUpdate {
    /// The offer was found, repriced and the collection saved.
    Updated { previous: Price },
    /// No offer carries this id; nothing changed.
    NotFound,
}

/// Owned offer collection plus the location of its storage slot.
#[derive(Debug)]
pub struct OfferStore {
    offers: Vec<Offer>,
    path: PathBuf,
}

/// Resolve the storage slot path from the platform data directory.
pub fn offers_path(data_dir: &Path) -> PathBuf {
    data_dir.join(OFFERS_FILE_NAME)
}

impl OfferStore {
    /// Create a store over an explicit collection (nothing is written).
    pub fn with_offers(offers: Vec<Offer>, path: PathBuf) -> Self {
        Self { offers, path }
    }

    /// Load the collection from `path`, or the defaults when there is no
    /// usable persisted collection. Never fails.
    pub fn load(path: PathBuf) -> Self {
        let offers = read_offers(&path).unwrap_or_else(|| {
            tracing::info!(path = %path.display(), "Using default offer collection");
            default_offers()
        });
        Self { offers, path }
    }

    /// All offers in collection order.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Look up an offer by id.
    pub fn get(&self, id: OfferId) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id == id)
    }

    /// Storage slot location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the full collection, replacing any prior value.
    pub fn save(&self) -> crate::util::error::Result<()> {
        write_offers(&self.offers, &self.path)?;
        Ok(())
    }

    /// Set the price of offer `id` and persist the collection.
    ///
    /// An unknown id leaves the collection untouched. A failed write is
    /// logged and otherwise ignored; the in-memory price stays updated.
    pub fn update_price(&mut self, id: OfferId, new_price: Price) -> PriceUpdate {
        let Some(offer) = self.offers.iter_mut().find(|o| o.id == id) else {
            tracing::debug!(id, "Price update for unknown offer ignored");
            return PriceUpdate::NotFound;
        };

        let previous = offer.price;
        offer.price = new_price;
        tracing::info!(id, previous, price = new_price, "Offer price updated");

        if let Err(e) = self.save() {
            tracing::warn!(error = %e, "Failed to persist offers");
        }
        PriceUpdate::Updated { previous }
    }
}

// =============================================================================
// I/O helpers
// =============================================================================

/// Read and validate the collection stored at `path`.
///
/// Returns `None` on any problem (file not found, JSON parse failure,
/// duplicate ids). The caller treats `None` as "no prior state".
fn read_offers(path: &Path) -> Option<Vec<Offer>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            // "Not found" is the normal first run.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read offers file");
            }
        })
        .ok()?;

    let offers: Vec<Offer> = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Offers file is malformed, falling back to defaults"
            );
        })
        .ok()?;

    if let Some(id) = find_duplicate_id(&offers) {
        tracing::warn!(
            path = %path.display(),
            id,
            "Offers file has a duplicate id, falling back to defaults"
        );
        return None;
    }

    tracing::info!(path = %path.display(), count = offers.len(), "Offers loaded");
    Some(offers)
}

/// Write `offers` to `path` atomically (write temp → rename).
///
/// Creates all parent directories as needed.
fn write_offers(offers: &[Offer], path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let json = serde_json::to_string_pretty(offers).map_err(|e| StoreError::Serialise {
        path: path.to_path_buf(),
        source: e,
    })?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(|e| StoreError::Io {
        path: tmp.clone(),
        operation: "write",
        source: e,
    })?;

    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        StoreError::Io {
            path: path.to_path_buf(),
            operation: "rename",
            source: e,
        }
    })?;

    tracing::debug!(path = %path.display(), count = offers.len(), "Offers saved");
    Ok(())
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_offers() -> Vec<Offer> {
        vec![
            Offer::new(10, "Orange", 750, "2Go", "15 jours"),
            Offer::new(3, "Moov", 0, "500Mo", "Unknown"),
            Offer::new(42, "MTN", 4_200, "25Go", "30 jours"),
        ]
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let store = OfferStore::load(offers_path(dir.path()));
        assert_eq!(store.offers(), default_offers().as_slice());
        assert!(!store.path().exists(), "loading must not write the slot");
    }

    #[test]
    fn test_load_malformed_json_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let path = offers_path(dir.path());
        std::fs::write(&path, b"not valid json [[[").unwrap();
        let store = OfferStore::load(path);
        assert_eq!(store.offers(), default_offers().as_slice());
    }

    #[test]
    fn test_load_wrong_shape_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let path = offers_path(dir.path());
        std::fs::write(&path, br#"{"id": 1, "price": 5}"#).unwrap();
        assert_eq!(OfferStore::load(path).offers(), default_offers().as_slice());
    }

    #[test]
    fn test_load_duplicate_ids_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let path = offers_path(dir.path());
        let mut offers = sample_offers();
        offers[2].id = 10;
        OfferStore::with_offers(offers, path.clone()).save().unwrap();
        assert_eq!(OfferStore::load(path).offers(), default_offers().as_slice());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(OFFERS_FILE_NAME);
        let original = sample_offers();

        OfferStore::with_offers(original.clone(), path.clone())
            .save()
            .expect("save should succeed");
        let loaded = OfferStore::load(path);
        assert_eq!(loaded.offers(), original.as_slice());
    }

    #[test]
    fn test_save_overwrites_leftover_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = offers_path(dir.path());
        std::fs::write(path.with_extension("json.tmp"), b"garbage").unwrap();

        OfferStore::with_offers(sample_offers(), path.clone())
            .save()
            .unwrap();
        assert_eq!(OfferStore::load(path.clone()).offers(), sample_offers().as_slice());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_update_price_changes_only_target_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = offers_path(dir.path());
        let mut store = OfferStore::load(path.clone());

        assert_eq!(store.update_price(2, 650), PriceUpdate::Updated { previous: 1_000 });

        let mut expected = default_offers();
        expected[1].price = 650;
        assert_eq!(store.offers(), expected.as_slice());

        let reloaded = OfferStore::load(path);
        assert_eq!(reloaded.offers(), expected.as_slice());
    }

    #[test]
    fn test_update_price_unknown_id_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = offers_path(dir.path());
        let mut store = OfferStore::load(path.clone());

        assert_eq!(store.update_price(99, 1), PriceUpdate::NotFound);
        assert_eq!(store.offers(), default_offers().as_slice());
        assert!(!path.exists(), "a no-op must not write the slot");
    }

    #[test]
    fn test_get_by_id() {
        let store = OfferStore::with_offers(sample_offers(), PathBuf::from("unused.json"));
        assert_eq!(store.get(42).map(|o| o.price), Some(4_200));
        assert!(store.get(1).is_none());
    }
}
