// DataBudget - ui/panels/results.rs
//
// Results area (central panel). Draws the ResultsView produced by
// core::results; no filtering or ordering happens here.

use crate::app::state::AppState;
use crate::core::results::{OfferCard, ResultsView};
use crate::ui::theme;
use crate::util::constants::BEST_VALUE_LABEL;

/// Render the results area.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    match state.results {
        None => {
            ui.centered_and_justified(|ui| {
                ui.label("Choisissez un budget pour afficher les offres.");
            });
        }
        Some(ResultsView::Empty { message }) => {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new(message).size(18.0));
            });
        }
        Some(ResultsView::Listing(ref cards)) => {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for card in cards {
                        render_card(ui, card);
                        ui.add_space(theme::CARD_SPACING);
                    }
                });
        }
    }
}

fn render_card(ui: &mut egui::Ui, card: &OfferCard) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&card.price_label)
                    .size(20.0)
                    .strong()
                    .color(theme::PRICE_TEXT),
            );
            if card.best_value {
                ui.label(
                    egui::RichText::new(format!(" \u{2605} {BEST_VALUE_LABEL} "))
                        .strong()
                        .color(theme::BEST_VALUE_TEXT)
                        .background_color(theme::BEST_VALUE_BG),
                );
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(&card.operator).color(theme::MUTED_TEXT));
            });
        });
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&card.data).strong());
            ui.separator();
            ui.label(egui::RichText::new(&card.validity).color(theme::MUTED_TEXT));
        });
    });
}
