//! Integration tests for the signup form client.
//!
//! Drives the form controller against a wiremock signup endpoint to verify
//! how HTTP outcomes are normalized into user-visible messages.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use prelaunch::form::{Field, FormController, INDUSTRY_OTHER};

fn filled_controller(endpoint: String) -> FormController {
    let mut controller = FormController::new(endpoint);
    controller.form.set(Field::Name, "Ada");
    controller.form.set(Field::Email, "ada@example.com");
    controller.form.set(Field::Industry, "Technology");
    controller.form.set(Field::JobTitle, "Engineer");
    controller.form.set(Field::Organisation, "Acme");
    controller.form.set(Field::Phone, "+1-555-0100");
    controller.form.set_agree(true);
    controller
}

#[tokio::test]
async fn test_successful_submission_navigates_to_confirmation() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut controller = filled_controller(format!("{}/api/signup", mock_server.uri()));
    let navigated = controller.submit().await;

    assert!(navigated);
    assert_eq!(controller.error(), None);
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_conflict_renders_already_signed_up_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "Email already signed up" })),
        )
        .mount(&mock_server)
        .await;

    let mut controller = filled_controller(format!("{}/api/signup", mock_server.uri()));
    let navigated = controller.submit().await;

    assert!(!navigated);
    assert_eq!(controller.error(), Some("This email has already signed up."));
    // The submit control is re-enabled after a handled error
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_server_error_message_is_displayed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .mount(&mock_server)
        .await;

    let mut controller = filled_controller(format!("{}/api/signup", mock_server.uri()));
    assert!(!controller.submit().await);
    assert_eq!(controller.error(), Some("boom"));
}

#[tokio::test]
async fn test_server_error_without_message_falls_back_to_generic_text() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let mut controller = filled_controller(format!("{}/api/signup", mock_server.uri()));
    assert!(!controller.submit().await);
    assert_eq!(
        controller.error(),
        Some("Something went wrong. Please try again.")
    );
}

#[tokio::test]
async fn test_network_failure_renders_network_error() {
    // Nothing listens here; the request never completes
    let mut controller = filled_controller("http://127.0.0.1:1/api/signup".to_string());
    assert!(!controller.submit().await);
    assert_eq!(controller.error(), Some("Network error. Please try again."));
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_other_without_override_blocks_without_any_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut controller = filled_controller(format!("{}/api/signup", mock_server.uri()));
    controller.form.set(Field::Industry, INDUSTRY_OTHER);

    assert!(!controller.submit().await);
    assert_eq!(controller.error(), Some("Please specify your industry."));
}

#[tokio::test]
async fn test_empty_form_blocks_without_any_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut controller = FormController::new(format!("{}/api/signup", mock_server.uri()));
    assert!(!controller.submit().await);
    assert_eq!(
        controller.error(),
        Some("Please fill in all required fields.")
    );
}

#[tokio::test]
async fn test_payload_carries_resolved_industry() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .and(body_partial_json(json!({
            "industry": "Non-profit",
            "jobTitle": "Engineer",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut controller = filled_controller(format!("{}/api/signup", mock_server.uri()));
    controller.form.set(Field::Industry, INDUSTRY_OTHER);
    controller.form.set(Field::IndustryOther, "Non-profit");

    assert!(controller.submit().await);
}
