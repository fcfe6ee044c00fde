use super::*;
use crate::egui_app::state::QueryPhase;
use crate::query_gateway::{QueryError, QueryResponse, Verification};

fn answered(body: &str) -> jobs::QueryOutcome {
    jobs::QueryOutcome {
        question: "how many users signed up?".to_string(),
        result: Ok(crate::query_gateway::api::parse_query_response(body).unwrap()),
    }
}

fn failed(message: &str) -> jobs::QueryOutcome {
    jobs::QueryOutcome {
        question: "how many users signed up?".to_string(),
        result: Err(QueryError::Server(message.to_string())),
    }
}

#[test]
fn empty_question_is_a_noop() {
    let mut controller = QueryController::new();
    controller.ui.question_input = "   \t  ".to_string();
    let before = controller.ui.status.clone();
    controller.submit_query();
    assert_eq!(controller.ui.phase, QueryPhase::Idle);
    assert!(!controller.query_in_flight());
    assert_eq!(controller.ui.status, before);
}

#[test]
fn submit_while_in_flight_is_ignored() {
    let mut controller = QueryController::new();
    controller.jobs.query_in_progress = true;
    controller.ui.question_input = "how many users?".to_string();
    controller.ui.sql = "SELECT 1".to_string();
    controller.submit_query();
    assert_eq!(controller.ui.sql, "SELECT 1");
    assert_eq!(controller.ui.phase, QueryPhase::Idle);
}

#[test]
fn loading_clears_every_output_facet_together() {
    let mut controller = QueryController::new();
    controller.ui.sql = "SELECT 1".to_string();
    controller.ui.results.columns = vec!["a".to_string()];
    controller.ui.results.rows = vec![vec!["1".to_string()]];
    controller.ui.verification.badge_label = "Valid".to_string();
    controller.ui.verification.confidence_text = "Confidence: 0.97".to_string();
    controller.ui.verification.explanation = "fine".to_string();

    controller.enter_loading();

    assert_eq!(controller.ui.phase, QueryPhase::Loading);
    assert!(controller.ui.sql.is_empty());
    assert!(controller.ui.results.is_empty());
    assert_eq!(controller.ui.verification.badge_label, "-");
    assert!(controller.ui.verification.confidence_text.is_empty());
    assert!(controller.ui.verification.explanation.is_empty());
    assert_eq!(controller.ui.results_placeholder(), "Fetching data...");
}

#[test]
fn success_populates_all_facets_consistently() {
    let mut controller = QueryController::new();
    controller.enter_loading();
    controller.jobs.query_in_progress = true;

    controller.handle_query_finished(answered(
        r#"{
            "sql": "SELECT COUNT(*) FROM users",
            "data": [{"count": 42}],
            "verification": {"status": "valid", "confidence": 0.97, "reason": "Matches schema."}
        }"#,
    ));

    assert_eq!(controller.ui.phase, QueryPhase::Success);
    assert!(!controller.query_in_flight());
    assert_eq!(controller.ui.sql, "SELECT COUNT(*) FROM users");
    assert_eq!(controller.ui.results.columns, ["count"]);
    assert_eq!(controller.ui.results.rows, [["42"]]);
    assert_eq!(controller.ui.verification.badge_label, "Valid");
    assert_eq!(controller.ui.verification.status, "valid");
    assert_eq!(
        controller.ui.verification.confidence_text,
        "Confidence: 0.97"
    );
    assert_eq!(controller.ui.verification.explanation, "Matches schema.");
}

#[test]
fn empty_data_shows_completed_empty_placeholder() {
    let mut controller = QueryController::new();
    controller.enter_loading();
    controller.handle_query_finished(answered(r#"{"sql": "SELECT 1", "data": []}"#));

    assert_eq!(controller.ui.phase, QueryPhase::Success);
    assert!(controller.ui.results.is_empty());
    assert_eq!(controller.ui.results_placeholder(), "No results.");
}

#[test]
fn badge_capitalizes_only_the_first_character() {
    let mut controller = QueryController::new();
    controller.enter_loading();
    controller.handle_query_finished(answered(
        r#"{"verification": {"status": "UNVERIFIED", "confidence": 0.5, "reason": "?"}}"#,
    ));
    assert_eq!(controller.ui.verification.badge_label, "UNVERIFIED");
    assert_eq!(
        controller.ui.verification.confidence_text,
        "Confidence: 0.50"
    );
}

#[test]
fn failure_renders_the_fixed_error_badge() {
    let mut controller = QueryController::new();
    controller.ui.question_input = "bad question".to_string();
    controller.enter_loading();
    controller.jobs.query_in_progress = true;

    controller.handle_query_finished(failed("Unparseable question"));

    assert_eq!(controller.ui.phase, QueryPhase::Error);
    assert!(!controller.query_in_flight());
    assert!(controller.ui.sql.is_empty());
    assert!(controller.ui.results.is_empty());
    assert_eq!(controller.ui.verification.badge_label, "Error");
    assert_eq!(controller.ui.verification.status, "invalid");
    assert!(controller.ui.verification.confidence_text.is_empty());
    assert_eq!(controller.ui.verification.explanation, "Unparseable question");
}

#[test]
fn transport_failures_surface_their_message() {
    let mut controller = QueryController::new();
    controller.enter_loading();
    controller.handle_query_finished(jobs::QueryOutcome {
        question: "q".to_string(),
        result: Err(QueryError::Transport("connection refused".to_string())),
    });
    assert_eq!(controller.ui.phase, QueryPhase::Error);
    assert_eq!(
        controller.ui.verification.explanation,
        "HTTP error: connection refused"
    );
}

#[test]
fn secondary_table_follows_the_feature_flag() {
    let body = r#"{"data": [{"count": 42}]}"#;

    let mut without = QueryController::new();
    without.enter_loading();
    without.handle_query_finished(answered(body));
    assert!(without.ui.verification.table.is_empty());

    let mut with = QueryController::new();
    with.ui.verification.table_enabled = true;
    with.enter_loading();
    with.handle_query_finished(answered(body));
    assert_eq!(with.ui.verification.table, with.ui.results);
}

#[test]
fn missing_response_fields_fall_back_to_empty_defaults() {
    let mut controller = QueryController::new();
    controller.enter_loading();
    controller.handle_query_finished(answered("{}"));

    assert_eq!(controller.ui.phase, QueryPhase::Success);
    assert!(controller.ui.sql.is_empty());
    assert!(controller.ui.results.is_empty());
    assert_eq!(controller.ui.verification.badge_label, "Unverified");
    assert_eq!(
        controller.ui.verification.confidence_text,
        "Confidence: 0.00"
    );
}

#[test]
fn defaults_match_the_default_verification() {
    let verification = Verification::default();
    assert_eq!(verification.status, "unverified");
    assert_eq!(verification.confidence, 0.0);
    let response = QueryResponse::default();
    assert!(response.sql.is_empty());
    assert!(response.data.is_empty());
}
