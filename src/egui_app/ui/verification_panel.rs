use eframe::egui::{self, RichText, ScrollArea, Ui};

use super::{style, table};
use crate::egui_app::state::{QueryPhase, UiState};

/// Verification panel: badge, confidence, explanation, optional data table.
pub(super) fn render(ui: &mut Ui, state: &UiState) {
    ui.heading("Verification");
    let verification = &state.verification;
    let color = style::badge_color(&verification.status);

    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 6.0, color);
        ui.label(RichText::new(&verification.badge_label).strong().color(color));
        if !verification.confidence_text.is_empty() {
            ui.separator();
            ui.label(&verification.confidence_text);
        }
    });
    if !verification.explanation.is_empty() {
        ui.label(&verification.explanation);
    }

    if verification.table_enabled && state.phase == QueryPhase::Success {
        ui.add_space(4.0);
        ui.label(RichText::new("Relevant data").strong());
        if verification.table.is_empty() {
            table::empty_state(ui, "No relevant data.");
        } else {
            ScrollArea::both()
                .id_salt("verification_scroll")
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    table::render(ui, "verification_grid", &verification.table);
                });
        }
    }
}
