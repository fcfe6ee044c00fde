//! egui renderer for the query console.

use std::time::Duration;

use eframe::egui;

use crate::egui_app::controller::QueryController;
use crate::egui_app::state::QueryPhase;

mod query_bar;
mod results_panel;
mod sql_panel;
mod style;
mod table;
mod verification_panel;

/// Smallest window the layout stays usable at.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2::new(720.0, 520.0);

/// Renders the egui UI from the shared controller state.
pub struct QueryApp {
    controller: QueryController,
    visuals_set: bool,
}

impl QueryApp {
    /// Create the app and load persisted configuration.
    pub fn new() -> Self {
        let mut controller = QueryController::new();
        controller.load_configuration();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = &self.controller.ui.status;
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(rect.center(), 5.0, style::status_tone_color(status.tone));
                ui.label(&status.text);
            });
        });
    }
}

impl Default for QueryApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for QueryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();

        query_bar::render(ctx, &mut self.controller);
        self.render_footer(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            sql_panel::render(ui, &self.controller.ui);
            ui.separator();
            results_panel::render(ui, &self.controller.ui);
            ui.separator();
            verification_panel::render(ui, &self.controller.ui);
        });

        // Keep frames coming while a job is in flight so its outcome is
        // picked up promptly without user input.
        if self.controller.ui.phase == QueryPhase::Loading {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
