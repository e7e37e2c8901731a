//! Tests for application state

use super::*;
use crate::test_utils::test_helpers::{test_app, wired_app};

#[test]
fn test_new_app_starts_idle() {
    let app = App::new();

    assert!(!app.should_quit());
    assert_eq!(app.query(), "");
    assert!(!app.dropdown.is_visible());
    assert!(app.history.is_empty());
    assert_eq!(app.request_id, 0);
}

#[test]
fn test_request_ids_increase() {
    let mut app = test_app();

    assert_eq!(app.next_request_id(), 1);
    assert_eq!(app.next_request_id(), 2);
    assert_eq!(app.next_request_id(), 3);
}

#[test]
fn test_send_request_without_worker_is_a_noop() {
    let mut app = test_app();

    app.send_request(ServiceRequest::Clear { request_id: 1 });
}

// ========== Query Changes ==========

#[test]
fn test_on_query_changed_requests_suggestions() {
    let (mut app, request_rx, _response_tx) = wired_app();
    app.input.textarea.insert_str("ru");

    app.on_query_changed();

    assert!(app.dropdown.is_visible());
    assert_eq!(app.dropdown.awaiting(), Some(1));
    match request_rx.try_recv().unwrap() {
        ServiceRequest::Suggest { query, request_id } => {
            assert_eq!(query, "ru");
            assert_eq!(request_id, 1);
        }
        other => panic!("Expected Suggest, got {other:?}"),
    }
}

#[test]
fn test_on_query_changed_with_empty_input_closes_without_fetch() {
    let (mut app, request_rx, _response_tx) = wired_app();
    app.dropdown.open_pending(9);

    app.on_query_changed();

    assert!(!app.dropdown.is_visible());
    assert!(request_rx.try_recv().is_err());
}

// ========== Suggestion Acceptance ==========

#[test]
fn test_select_dropdown_row_copies_value_and_closes() {
    let (mut app, request_rx, _response_tx) = wired_app();
    app.dropdown.open_pending(1);
    app.dropdown.populate(vec![
        Suggestion::new("rust book"),
        Suggestion::new("rust blog"),
    ]);

    app.select_dropdown_row(1);

    assert_eq!(app.query(), "rust blog");
    assert!(!app.dropdown.is_visible());
    // Accepting is not a user edit, so no fetch follows
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_select_dropdown_row_out_of_range_is_ignored() {
    let mut app = test_app();
    app.dropdown.open_pending(1);
    app.dropdown.populate(vec![Suggestion::new("only")]);

    app.select_dropdown_row(5);

    assert_eq!(app.query(), "");
    assert!(app.dropdown.is_visible());
}

#[test]
fn test_accept_focused_suggestion_without_focus_reports_false() {
    let mut app = test_app();
    app.dropdown.open_pending(1);
    app.dropdown.populate(vec![Suggestion::new("row")]);

    assert!(!app.accept_focused_suggestion());
    assert!(app.dropdown.is_visible());
}

#[test]
fn test_accept_focused_suggestion_with_focus_selects() {
    let mut app = test_app();
    app.dropdown.open_pending(1);
    app.dropdown
        .populate(vec![Suggestion::new("alpha"), Suggestion::new("beta")]);
    app.dropdown.focus_next();

    assert!(app.accept_focused_suggestion());
    assert_eq!(app.query(), "alpha");
    assert!(!app.dropdown.is_visible());
}

// ========== Submission and Clearing ==========

#[test]
fn test_submit_query_sends_the_text() {
    let (mut app, request_rx, _response_tx) = wired_app();
    app.input.textarea.insert_str("rust");

    app.submit_query();

    // Input keeps its text until the answer lands
    assert_eq!(app.query(), "rust");
    match request_rx.try_recv().unwrap() {
        ServiceRequest::Submit { query, .. } => assert_eq!(query, "rust"),
        other => panic!("Expected Submit, got {other:?}"),
    }
}

#[test]
fn test_submit_query_ignores_empty_input() {
    let (mut app, request_rx, _response_tx) = wired_app();

    app.submit_query();

    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_request_clear_sends_a_clear() {
    let (mut app, request_rx, _response_tx) = wired_app();

    app.request_clear();

    assert!(matches!(
        request_rx.try_recv().unwrap(),
        ServiceRequest::Clear { request_id: 1 }
    ));
}

// ========== Response Handling ==========

#[test]
fn test_poll_service_applies_responses_in_order() {
    let (mut app, _request_rx, response_tx) = wired_app();
    app.input.textarea.insert_str("ru");
    app.on_query_changed();
    let awaiting = app.dropdown.awaiting().unwrap();

    response_tx
        .send(ServiceResponse::Suggestions {
            suggestions: vec!["rust".to_string()],
            request_id: awaiting,
        })
        .unwrap();
    response_tx
        .send(ServiceResponse::Submitted {
            history: vec!["ru".to_string()],
            request_id: 99,
        })
        .unwrap();

    app.poll_service();

    assert_eq!(app.dropdown.items().len(), 1);
    assert_eq!(app.history.entries(), vec!["ru"]);
}

#[test]
fn test_poll_service_without_worker_is_a_noop() {
    let mut app = test_app();

    app.poll_service();
}

#[test]
fn test_stale_suggestions_are_dropped() {
    let (mut app, _request_rx, response_tx) = wired_app();
    app.input.textarea.insert_str("r");
    app.on_query_changed();
    app.input.textarea.insert_str("u");
    app.on_query_changed();

    // Answer to the first, superseded request
    response_tx
        .send(ServiceResponse::Suggestions {
            suggestions: vec!["recycled".to_string()],
            request_id: 1,
        })
        .unwrap();
    app.poll_service();

    assert!(app.dropdown.items().is_empty());
    assert_eq!(app.dropdown.awaiting(), Some(2));

    // The answer to the live request still lands
    response_tx
        .send(ServiceResponse::Suggestions {
            suggestions: vec!["rust".to_string()],
            request_id: 2,
        })
        .unwrap();
    app.poll_service();

    assert_eq!(app.dropdown.items()[0].label, "rust");
}

#[test]
fn test_suggestions_after_closing_the_dropdown_are_dropped() {
    let (mut app, _request_rx, response_tx) = wired_app();
    app.input.textarea.insert_str("ru");
    app.on_query_changed();
    app.close_dropdown();

    response_tx
        .send(ServiceResponse::Suggestions {
            suggestions: vec!["rust".to_string()],
            request_id: 1,
        })
        .unwrap();
    app.poll_service();

    assert!(!app.dropdown.is_visible());
    assert!(app.dropdown.items().is_empty());
}

#[test]
fn test_submitted_response_replaces_history_then_clears_input() {
    let (mut app, _request_rx, response_tx) = wired_app();
    app.input.textarea.insert_str("rust");
    app.submit_query();

    response_tx
        .send(ServiceResponse::Submitted {
            history: vec!["rust".to_string()],
            request_id: 1,
        })
        .unwrap();
    app.poll_service();

    assert_eq!(app.history.entries(), vec!["rust"]);
    assert_eq!(app.query(), "");
}

#[test]
fn test_cleared_response_replaces_history_without_touching_input() {
    let (mut app, _request_rx, response_tx) = wired_app();
    app.input.textarea.insert_str("typing");
    app.history.replace(vec!["old".to_string()]);

    response_tx
        .send(ServiceResponse::Cleared {
            history: Vec::new(),
            request_id: 1,
        })
        .unwrap();
    app.poll_service();

    assert!(app.history.is_empty());
    assert_eq!(app.query(), "typing");
}
