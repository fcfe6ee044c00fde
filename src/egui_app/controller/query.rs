use super::*;
use crate::egui_app::state::{QueryPhase, TableView};
use crate::egui_app::view_model;
use crate::query_gateway::QueryResponse;

impl QueryController {
    /// Submit the trimmed question input.
    ///
    /// Empty or whitespace-only input is a no-op, as is a submission while a
    /// query is already in flight.
    pub fn submit_query(&mut self) {
        let question = self.ui.question_input.trim().to_string();
        if question.is_empty() {
            return;
        }
        if self.jobs.query_in_progress() {
            return;
        }
        self.enter_loading();
        self.jobs.begin_query(jobs::QueryJob {
            endpoint: self.settings.endpoint.clone(),
            question,
        });
    }

    /// Clear every output facet together and move to the loading phase.
    pub(crate) fn enter_loading(&mut self) {
        self.ui.phase = QueryPhase::Loading;
        self.ui.sql.clear();
        self.ui.results.clear();
        self.ui.verification.reset();
        self.set_status("Running query...", StatusTone::Info);
    }

    pub(crate) fn handle_query_finished(&mut self, outcome: jobs::QueryOutcome) {
        self.jobs.clear_query();
        match outcome.result {
            Ok(response) => {
                tracing::info!(
                    "Question answered with {} rows ({:?})",
                    response.data.len(),
                    outcome.question
                );
                self.apply_answer(response);
            }
            Err(err) => {
                tracing::warn!("Question failed ({:?}): {err}", outcome.question);
                self.apply_query_error(err.to_string());
            }
        }
    }

    /// Populate SQL, table, and verification panel from one response.
    fn apply_answer(&mut self, response: QueryResponse) {
        self.ui.phase = QueryPhase::Success;
        self.ui.sql = response.sql;
        self.ui.results = view_model::results_table(&response.data);

        let verification = &mut self.ui.verification;
        verification.badge_label = view_model::badge_label(&response.verification.status);
        verification.status = response.verification.status;
        verification.confidence_text =
            view_model::confidence_text(response.verification.confidence);
        verification.explanation = response.verification.reason;
        verification.table = if verification.table_enabled {
            self.ui.results.clone()
        } else {
            TableView::default()
        };

        let row_count = self.ui.results.rows.len();
        let suffix = if row_count == 1 { "" } else { "s" };
        self.set_status(format!("{row_count} row{suffix} returned"), StatusTone::Info);
    }

    /// Error rendering: cleared SQL/table, fixed invalid badge, message shown.
    fn apply_query_error(&mut self, message: String) {
        self.ui.phase = QueryPhase::Error;
        self.ui.sql.clear();
        self.ui.results.clear();

        let verification = &mut self.ui.verification;
        verification.badge_label = "Error".to_string();
        verification.status = "invalid".to_string();
        verification.confidence_text.clear();
        verification.explanation = message;
        verification.table.clear();

        self.set_status("Query failed", StatusTone::Error);
    }
}
