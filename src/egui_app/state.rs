//! Shared state types for the egui UI.
//!
//! The renderer never stores authoritative state; everything on screen is
//! derived from these values each frame.

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Raw contents of the question input field.
    pub question_input: String,
    /// Where the console is in the ask/answer cycle.
    pub phase: QueryPhase,
    /// Generated SQL shown verbatim; empty clears the block.
    pub sql: String,
    /// Main results table.
    pub results: TableView,
    /// Verification panel contents.
    pub verification: VerificationView,
    /// Footer notice unrelated to the verification verdict.
    pub status: StatusBarState,
}

impl UiState {
    /// Placeholder for the results area, derived from the phase.
    ///
    /// The transient loading text and the completed-empty text are distinct
    /// states and are never conflated.
    pub fn results_placeholder(&self) -> &'static str {
        match self.phase {
            QueryPhase::Idle => "",
            QueryPhase::Loading => "Fetching data...",
            QueryPhase::Success | QueryPhase::Error => "No results.",
        }
    }
}

/// Explicit phase of the one-query-at-a-time cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Render-ready generic table: header labels plus display-string cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn clear(&mut self) {
        self.columns.clear();
        self.rows.clear();
    }
}

/// Verification panel contents.
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationView {
    /// Badge text; "-" until a verdict or error arrives.
    pub badge_label: String,
    /// Raw status driving the badge tone; empty means neutral.
    pub status: String,
    /// Preformatted "Confidence: x.xx" line, empty when cleared.
    pub confidence_text: String,
    /// The verdict's reason, or the error message in the error state.
    pub explanation: String,
    /// Optional second rendering of the result rows.
    pub table: TableView,
    /// Whether the secondary table feature is enabled in config.
    pub table_enabled: bool,
}

impl Default for VerificationView {
    fn default() -> Self {
        Self {
            badge_label: "-".to_string(),
            status: String::new(),
            confidence_text: String::new(),
            explanation: String::new(),
            table: TableView::default(),
            table_enabled: false,
        }
    }
}

impl VerificationView {
    /// Reset to the neutral pre-answer appearance, keeping the feature flag.
    pub fn reset(&mut self) {
        let table_enabled = self.table_enabled;
        *self = Self {
            table_enabled,
            ..Self::default()
        };
    }
}

/// Status notice + tone shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub tone: StatusTone,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            text: "Ask a question to get started".to_string(),
            tone: StatusTone::Idle,
        }
    }
}

/// Tones for footer notices, mapped to colors by the style module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Warning,
    Error,
}
