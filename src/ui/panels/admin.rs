// DataBudget - ui/panels/admin.rs
//
// Admin window: one editable price field per offer, collection order.
// A field commits when it loses focus (Enter or click elsewhere) with a
// value different from the stored price.

use crate::app::state::AppState;
use crate::core::model::OfferId;
use crate::ui::theme;

/// Render the admin window (if the admin surface is visible).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.admin.is_visible() {
        return;
    }

    let mut open = true;
    let mut commits: Vec<(OfferId, String)> = Vec::new();

    egui::Window::new("Administration des offres")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .min_width(theme::ADMIN_MIN_WIDTH)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Les modifications sont enregistrées immédiatement.")
                    .small()
                    .weak(),
            );
            ui.separator();

            egui::Grid::new("admin_grid")
                .num_columns(4)
                .spacing([12.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Opérateur");
                    ui.strong("Données");
                    ui.strong("Validité");
                    ui.strong("Prix (FCFA)");
                    ui.end_row();

                    for row in state.admin.rows_mut() {
                        ui.label(&row.operator);
                        ui.label(&row.data);
                        ui.label(egui::RichText::new(&row.validity).color(theme::MUTED_TEXT));
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut row.price_text)
                                .desired_width(theme::PRICE_FIELD_WIDTH),
                        );
                        let stored = state.store.get(row.id).map(|o| o.price.to_string());
                        if response.lost_focus() && stored.as_deref() != Some(row.price_text.as_str())
                        {
                            commits.push((row.id, row.price_text.clone()));
                        }
                        ui.end_row();
                    }
                });
        });

    for (id, raw) in commits {
        state.commit_price_edit(id, &raw);
    }

    if !open {
        state.admin.close();
    }
}
