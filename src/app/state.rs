// DataBudget - app/state.rs
//
// Application state management. Holds the offer store, the budget field,
// the current results view and the admin editor.
// Owned by the eframe::App implementation.

use crate::app::admin::{AdminEditor, EditOutcome};
use crate::app::store::OfferStore;
use crate::core::input::{parse_budget, BudgetInput};
use crate::core::model::OfferId;
use crate::core::results::{build_view, ResultsView};
use crate::platform::config::AppConfig;

/// Result of running a search from the budget field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results were replaced; holds the number of matching offers.
    Shown { matches: usize },
    /// The budget was unusable; previous results are still displayed.
    Ignored,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The offer collection and its storage slot.
    pub store: OfferStore,

    /// Raw text of the budget field.
    pub budget_input: String,

    /// Current results. None until the first valid search.
    pub results: Option<ResultsView>,

    /// Admin price editor.
    pub admin: AdminEditor,

    /// Budget shortcut values.
    pub quick_budgets: Vec<i64>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state over a loaded store.
    pub fn new(store: OfferStore, config: &AppConfig, debug_mode: bool) -> Self {
        Self {
            store,
            budget_input: String::new(),
            results: None,
            admin: AdminEditor::new(),
            quick_budgets: config.quick_budgets.clone(),
            status_message: "Entrez votre budget pour voir les offres.".to_string(),
            dark_mode: config.dark_mode,
            font_size: config.font_size,
            debug_mode,
        }
    }

    /// Filter the store by the budget field and replace the results view.
    ///
    /// An empty, non-numeric or zero budget leaves everything untouched.
    pub fn search(&mut self) -> SearchOutcome {
        let budget = match parse_budget(&self.budget_input) {
            BudgetInput::Budget(budget) => budget,
            BudgetInput::Ignored(reason) => {
                tracing::debug!(input = %self.budget_input, ?reason, "Budget ignored");
                return SearchOutcome::Ignored;
            }
        };

        let offers = self.store.offers();
        let indices = crate::core::filter::apply_budget(offers, budget);
        let view = build_view(offers, &indices);
        let matches = view.len();

        tracing::debug!(budget, matches, "Search completed");
        self.status_message = match matches {
            0 => format!("Aucune offre pour {budget} FCFA."),
            1 => format!("1 offre trouvée pour {budget} FCFA."),
            n => format!("{n} offres trouvées pour {budget} FCFA."),
        };
        self.results = Some(view);
        SearchOutcome::Shown { matches }
    }

    /// Put a shortcut value in the budget field and search.
    pub fn apply_quick_budget(&mut self, budget: i64) -> SearchOutcome {
        self.budget_input = budget.to_string();
        self.search()
    }

    /// Show or hide the admin surface.
    pub fn toggle_admin(&mut self) {
        self.admin.toggle(&self.store);
    }

    /// Commit an admin price field. The results view is not refreshed.
    pub fn commit_price_edit(&mut self, id: OfferId, raw_value: &str) -> EditOutcome {
        let outcome = self.admin.on_edit(&mut self.store, id, raw_value);
        match outcome {
            EditOutcome::Committed { id, price } => {
                self.status_message = format!("Prix de l'offre {id} mis à jour : {price} FCFA.");
            }
            EditOutcome::InvalidPrice { id } => {
                tracing::debug!(id, "Price edit discarded");
            }
            EditOutcome::UnknownOffer { id } => {
                tracing::debug!(id, "Edit for unknown offer discarded");
            }
        }
        outcome
    }
}
