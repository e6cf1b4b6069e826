// DataBudget - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the menu bar, status bar, search sidebar, results area
// and admin window.

use crate::app::state::AppState;
use crate::ui;

/// The DataBudget application.
pub struct DataBudgetApp {
    pub state: AppState,
}

impl DataBudgetApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DataBudgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Fichier", |ui| {
                    if ui.button("Quitter").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Affichage", |ui| {
                    let label = if self.state.admin.is_visible() {
                        "Fermer l'administration"
                    } else {
                        "Administration\u{2026}"
                    };
                    if ui.button(label).clicked() {
                        self.state.toggle_admin();
                        ui.close_menu();
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.state.admin.is_visible(), "\u{2699} Admin")
                        .clicked()
                    {
                        self.state.toggle_admin();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} offres", self.state.store.offers().len()));
                    if self.state.debug_mode {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(self.state.store.path().display().to_string())
                                .small()
                                .weak(),
                        );
                    }
                });
            });
        });

        // Left sidebar
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::search::render(ui, &mut self.state);
            });

        // Central panel (results)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::results::render(ui, &self.state);
        });

        ui::panels::admin::render(ctx, &mut self.state);
    }
}
