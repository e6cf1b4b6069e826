// DataBudget - ui/theme.rs
//
// Colours and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Best-value badge colours.
pub const BEST_VALUE_TEXT: Color32 = Color32::from_rgb(34, 197, 94); // Green 500
pub const BEST_VALUE_BG: Color32 = Color32::from_rgba_premultiplied(34, 197, 94, 30);

/// Price emphasis colour.
pub const PRICE_TEXT: Color32 = Color32::from_rgb(251, 146, 60); // Orange 400

/// Muted colour for secondary labels (operator, validity).
pub const MUTED_TEXT: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const CARD_SPACING: f32 = 6.0;
pub const BUDGET_FIELD_WIDTH: f32 = 140.0;
pub const PRICE_FIELD_WIDTH: f32 = 90.0;
pub const ADMIN_MIN_WIDTH: f32 = 420.0;

/// Apply the theme and body font size to the egui context.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        style
            .text_styles
            .insert(egui::TextStyle::Body, egui::FontId::proportional(font_size));
        style
            .text_styles
            .insert(egui::TextStyle::Button, egui::FontId::proportional(font_size));
    });
}
