use eframe::egui::{ScrollArea, Ui};

use super::table;
use crate::egui_app::state::UiState;

/// Results area: full table at once, or the phase-derived placeholder.
pub(super) fn render(ui: &mut Ui, state: &UiState) {
    ui.heading("Results");
    if state.results.is_empty() {
        table::empty_state(ui, state.results_placeholder());
        return;
    }
    ScrollArea::both()
        .id_salt("results_scroll")
        .max_height(ui.available_height() * 0.55)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            table::render(ui, "results_grid", &state.results);
        });
}
