// DataBudget - ui/panels/search.rs
//
// Budget field, search button and quick-budget shortcuts (left sidebar).

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::CURRENCY;

/// Render the search controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Votre budget");
    ui.separator();

    let mut run_search = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.budget_input)
                .hint_text("Budget (FCFA)")
                .desired_width(theme::BUDGET_FIELD_WIDTH),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            run_search = true;
        }
        if ui.button("Rechercher").clicked() {
            run_search = true;
        }
    });
    if run_search {
        state.search();
    }

    ui.add_space(8.0);
    ui.label("Budgets rapides :");

    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        for &budget in &state.quick_budgets {
            if ui.button(format!("{budget} {CURRENCY}")).clicked() {
                picked = Some(budget);
            }
        }
    });
    if let Some(budget) = picked {
        state.apply_quick_budget(budget);
    }
}
