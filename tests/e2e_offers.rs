// DataBudget - tests/e2e_offers.rs
//
// End-to-end tests: store on disk -> budget search -> results view, and
// admin edits persisted across a restart.

use databudget::app::admin::EditOutcome;
use databudget::app::state::{AppState, SearchOutcome};
use databudget::app::store::{offers_path, OfferStore};
use databudget::core::model::{default_offers, Offer};
use databudget::core::results::ResultsView;
use databudget::platform::config::AppConfig;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Start the application state the way `main` does, over `dir`.
fn start(dir: &TempDir) -> AppState {
    let store = OfferStore::load(offers_path(dir.path()));
    AppState::new(store, &AppConfig::default(), false)
}

fn listed_ids(state: &AppState) -> Vec<u32> {
    match state.results {
        Some(ResultsView::Listing(ref cards)) => cards.iter().map(|c| c.offer_id).collect(),
        _ => Vec::new(),
    }
}

// =============================================================================
// Search E2E
// =============================================================================

/// First run with no storage: budget 500 lists offer 4 then offer 1.
#[test]
fn e2e_first_run_budget_500() {
    let dir = TempDir::new().unwrap();
    let mut state = start(&dir);
    state.budget_input = "500".to_string();

    assert_eq!(state.search(), SearchOutcome::Shown { matches: 2 });
    assert_eq!(listed_ids(&state), vec![4, 1]);

    let Some(ResultsView::Listing(ref cards)) = state.results else {
        panic!("expected a listing");
    };
    assert!(cards[0].best_value);
    assert!(!cards[1].best_value);
}

/// A budget under every price shows the "no offers" message.
#[test]
fn e2e_budget_50_shows_no_offers_message() {
    let dir = TempDir::new().unwrap();
    let mut state = start(&dir);
    state.apply_quick_budget(50);

    assert_eq!(
        state.results,
        Some(ResultsView::Empty {
            message: "Aucune offre disponible."
        })
    );
}

// =============================================================================
// Admin E2E
// =============================================================================

/// Editing offer 2 to "650" persists and survives a restart.
#[test]
fn e2e_admin_edit_persists_across_restart() {
    let dir = TempDir::new().unwrap();
    let mut state = start(&dir);
    state.toggle_admin();
    assert!(state.admin.is_visible());

    assert_eq!(
        state.commit_price_edit(2, "650"),
        EditOutcome::Committed { id: 2, price: 650 }
    );

    let restarted = start(&dir);
    let mut expected = default_offers();
    expected[1].price = 650;
    assert_eq!(restarted.store.offers(), expected.as_slice());
}

/// A repriced offer shows up in the next search, not before.
#[test]
fn e2e_edit_visible_on_next_search() {
    let dir = TempDir::new().unwrap();
    let mut state = start(&dir);
    state.apply_quick_budget(1_000);
    assert_eq!(listed_ids(&state), vec![4, 1, 2]);

    state.toggle_admin();
    state.commit_price_edit(2, "100");
    assert_eq!(listed_ids(&state), vec![4, 1, 2], "view must not auto-refresh");

    state.search();
    assert_eq!(listed_ids(&state), vec![2, 4, 1]);
}

/// Rejected and unknown edits leave the storage slot unwritten.
#[test]
fn e2e_invalid_edits_do_not_touch_storage() {
    let dir = TempDir::new().unwrap();
    let mut state = start(&dir);
    state.toggle_admin();

    assert_eq!(
        state.commit_price_edit(1, "cher"),
        EditOutcome::InvalidPrice { id: 1 }
    );
    assert_eq!(
        state.commit_price_edit(9, "10"),
        EditOutcome::UnknownOffer { id: 9 }
    );
    assert!(!offers_path(dir.path()).exists());
}

// =============================================================================
// Storage E2E
// =============================================================================

/// A hand-written storage file is picked up as-is, in its own order.
#[test]
fn e2e_loads_existing_storage_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        offers_path(dir.path()),
        r#"[
            {"id": 5, "operator": "Airtel", "price": 300, "data": "1Go", "validity": "3 jours"},
            {"id": 6, "operator": "Airtel", "price": 300, "data": "800Mo", "validity": "Unknown"},
            {"id": 7, "operator": "MTN", "price": 150, "data": "200Mo", "validity": "1 jour"}
        ]"#,
    )
    .unwrap();

    let mut state = start(&dir);
    assert_eq!(state.store.offers().len(), 3);
    assert_eq!(
        state.store.get(6),
        Some(&Offer::new(6, "Airtel", 300, "800Mo", "Unknown"))
    );

    state.apply_quick_budget(500);
    assert_eq!(listed_ids(&state), vec![7, 5, 6]);
}

/// A corrupt storage file falls back to the defaults without error.
#[test]
fn e2e_corrupt_storage_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(offers_path(dir.path()), "{{ not json").unwrap();

    let state = start(&dir);
    assert_eq!(state.store.offers(), default_offers().as_slice());
}
