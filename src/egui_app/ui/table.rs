use eframe::egui::{Grid, RichText, Ui};

use crate::egui_app::state::TableView;

/// Render a generic table: one header cell per column, one row per entry.
pub(super) fn render(ui: &mut Ui, grid_id: &str, view: &TableView) {
    Grid::new(grid_id)
        .striped(true)
        .min_col_width(60.0)
        .show(ui, |ui| {
            for column in &view.columns {
                ui.label(RichText::new(column).strong());
            }
            ui.end_row();
            for row in &view.rows {
                for cell in row {
                    ui.label(cell);
                }
                ui.end_row();
            }
        });
}

/// Muted placeholder for an empty table area.
pub(super) fn empty_state(ui: &mut Ui, text: &str) {
    if !text.is_empty() {
        ui.label(RichText::new(text).weak().italics());
    }
}
