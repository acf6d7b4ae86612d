use std::time::Duration;

use serde_json::json;

use super::*;
use crate::net::types::GENERIC_FAILURE_MESSAGE;
use crate::test_helpers::{RecordingNavigator, RecordingView, ViewEvent, offline, respond, test_client};

#[tokio::test]
async fn success_confirms_and_goes_to_login() {
    let client = test_client(vec![respond(200, json!({ "status": "success" }))]);
    let controller = SignupController::new(&client);
    let view = RecordingView::signup(" Ann ", "a@x.com", "secret1");
    let nav = RecordingNavigator::default();

    controller.submit(&view, &nav).await.unwrap();

    assert_eq!(controller.phase(), FormPhase::Succeeded);
    assert_eq!(nav.visits(), vec![Page::Login]);
    assert_eq!(
        view.events(),
        vec![
            ViewEvent::ClearError,
            ViewEvent::Busy(true),
            ViewEvent::Busy(false),
            ViewEvent::Confirm(SIGNUP_CONFIRMATION.into()),
        ]
    );
    assert_eq!(
        client.transport().requests()[0].1,
        json!({ "action": "signup", "name": "Ann", "email": "a@x.com", "password": "secret1" })
    );
}

#[tokio::test]
async fn invalid_input_never_reaches_the_client() {
    let cases = [
        (RecordingView::signup("", "a@x.com", "secret1"), "All fields are required."),
        (RecordingView::signup("Ann", "  ", "secret1"), "All fields are required."),
        (RecordingView::signup("Ann", "a@x.com", ""), "All fields are required."),
        (RecordingView::signup("Ann", "a@x.com", "12345"), "Password must be at least 6 characters."),
    ];
    for (view, expected) in cases {
        let client = test_client(Vec::new());
        let controller = SignupController::new(&client);
        let nav = RecordingNavigator::default();

        let err = controller.submit(&view, &nav).await.unwrap_err();

        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(client.transport().calls(), 0);
        assert_eq!(view.errors(), vec![expected.to_owned()]);
        assert!(!view.events().contains(&ViewEvent::Busy(true)));
        assert!(nav.visits().is_empty());
        assert_eq!(controller.phase(), FormPhase::Failed);
    }
}

#[tokio::test]
async fn declined_response_renders_server_message() {
    let client = test_client(vec![respond(200, json!({ "success": false, "message": "Email already registered." }))]);
    let controller = SignupController::new(&client);
    let view = RecordingView::signup("Ann", "a@x.com", "secret1");
    let nav = RecordingNavigator::default();

    let err = controller.submit(&view, &nav).await.unwrap_err();

    assert_eq!(err, SubmitError::Declined("Email already registered.".into()));
    assert_eq!(view.errors(), vec!["Email already registered.".to_owned()]);
    assert_eq!(client.transport().calls(), 1);
    assert!(nav.visits().is_empty());
}

#[tokio::test]
async fn declined_response_without_message_uses_signup_fallback() {
    let client = test_client(vec![respond(200, json!({}))]);
    let controller = SignupController::new(&client);
    let view = RecordingView::signup("Ann", "a@x.com", "secret1");

    controller.submit(&view, &RecordingNavigator::default()).await.unwrap_err();

    assert_eq!(view.errors(), vec!["Signup failed. Please try again.".to_owned()]);
}

#[tokio::test]
async fn exhausted_retries_render_generic_message_and_reset_busy_once() {
    let client = test_client(vec![offline(), offline(), offline(), offline()]);
    let controller = SignupController::new(&client);
    let view = RecordingView::signup("Ann", "a@x.com", "secret1");
    let nav = RecordingNavigator::default();

    let err = controller.submit(&view, &nav).await.unwrap_err();

    assert!(matches!(err, SubmitError::Client(_)));
    assert_eq!(client.transport().calls(), 4);
    assert_eq!(client.sleeper().delays().len(), 3);
    assert_eq!(client.sleeper().delays()[2], Duration::from_millis(4000));
    assert_eq!(
        view.events(),
        vec![
            ViewEvent::ClearError,
            ViewEvent::Busy(true),
            ViewEvent::Busy(false),
            ViewEvent::Error(GENERIC_FAILURE_MESSAGE.into()),
        ]
    );
    assert!(nav.visits().is_empty());
}

#[tokio::test]
async fn resubmit_after_failure_clears_previous_error() {
    let client = test_client(vec![respond(200, json!({ "status": "success" }))]);
    let controller = SignupController::new(&client);
    let nav = RecordingNavigator::default();

    let bad = RecordingView::signup("Ann", "a@x.com", "123");
    controller.submit(&bad, &nav).await.unwrap_err();
    assert_eq!(controller.phase(), FormPhase::Failed);

    let good = RecordingView::signup("Ann", "a@x.com", "123456");
    controller.submit(&good, &nav).await.unwrap();
    assert_eq!(good.events()[0], ViewEvent::ClearError);
    assert_eq!(controller.phase(), FormPhase::Succeeded);
}
