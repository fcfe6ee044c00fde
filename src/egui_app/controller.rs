//! Maintains console state and bridges query logic to the egui UI.

use crate::config::{self, AppConfig};
use crate::egui_app::state::{StatusTone, UiState};

mod jobs;
mod query;
#[cfg(test)]
mod tests;

use jobs::JobMessage;

/// Owns the UI model, accepts intents from the renderer, and applies
/// background job outcomes back onto the state.
pub struct QueryController {
    /// Render model consumed by the egui renderer.
    pub ui: UiState,
    pub(crate) settings: AppConfig,
    pub(crate) jobs: jobs::ControllerJobs,
}

impl QueryController {
    pub fn new() -> Self {
        Self {
            ui: UiState::default(),
            settings: AppConfig::default(),
            jobs: jobs::ControllerJobs::new(),
        }
    }

    /// Load persisted configuration, keeping defaults on failure.
    pub fn load_configuration(&mut self) {
        match config::load_or_default() {
            Ok(cfg) => {
                self.ui.verification.table_enabled = cfg.feature_flags.verification_table_enabled;
                self.settings = cfg;
            }
            Err(err) => {
                self.set_status(
                    format!("Using default settings: {err}"),
                    StatusTone::Warning,
                );
            }
        }
    }

    /// True while a query job is running.
    pub fn query_in_flight(&self) -> bool {
        self.jobs.query_in_progress()
    }

    /// Drain finished background jobs and apply their outcomes.
    pub fn poll_background_jobs(&mut self) {
        loop {
            match self.jobs.try_recv_message() {
                Ok(JobMessage::QueryFinished(outcome)) => self.handle_query_finished(outcome),
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => break,
            }
        }
    }

    /// Update the footer notice.
    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.tone = tone;
    }
}

impl Default for QueryController {
    fn default() -> Self {
        Self::new()
    }
}
