use eframe::egui::{RichText, Ui};

use crate::egui_app::state::UiState;

/// Generated SQL shown verbatim; nothing is rendered while the block is clear.
pub(super) fn render(ui: &mut Ui, state: &UiState) {
    ui.heading("Generated SQL");
    if !state.sql.is_empty() {
        ui.label(RichText::new(&state.sql).monospace());
    }
}
