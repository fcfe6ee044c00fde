use eframe::egui::{self, Key, TextEdit};

use crate::egui_app::controller::QueryController;
use crate::egui_app::state::QueryPhase;

const RUN_BUTTON_WIDTH: f32 = 70.0;

/// Top bar: question input, run button, loading indicator.
pub(super) fn render(ctx: &egui::Context, controller: &mut QueryController) {
    egui::TopBottomPanel::top("query_bar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let loading = controller.ui.phase == QueryPhase::Loading;
            let input_width = (ui.available_width() - RUN_BUTTON_WIDTH).max(120.0);
            let input = ui.add_sized(
                [input_width, ui.spacing().interact_size.y],
                TextEdit::singleline(&mut controller.ui.question_input)
                    .hint_text("Ask a question about your data"),
            );
            let run = ui.add_enabled(!loading, egui::Button::new("Run"));
            let submitted =
                run.clicked() || (input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)));
            if submitted {
                controller.submit_query();
            }
            if loading {
                ui.add(egui::Spinner::new());
            }
        });
        ui.add_space(6.0);
    });
}
