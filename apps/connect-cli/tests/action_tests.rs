//! Integration tests for pause, resume, restart and delete
//!
//! Each action is checked for the endpoint it hits, the status code it
//! accepts and what it reports when the control plane answers differently.

mod common;

use common::TestContext;
use connect_cli::actions::{dispatch, dispatch_named, ConnectorAction};
use connect_cli::error::CliError;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_pause_sends_one_request_and_accepts_202() {
    let ctx = TestContext::new().await;
    ctx.mock_exists("c1").await;
    Mock::given(method("PUT"))
        .and(path("/connectors/c1/pause"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let outcome = dispatch(&ctx.client(), "c1", ConnectorAction::Pause).await.unwrap();
    assert_eq!(outcome.connector, "c1");
    assert_eq!(outcome.result, "paused");
}

#[tokio::test]
async fn test_pause_rejects_other_success_codes() {
    let ctx = TestContext::new().await;
    ctx.mock_exists("c1").await;
    Mock::given(method("PUT"))
        .and(path("/connectors/c1/pause"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&ctx.server)
        .await;

    let err = dispatch(&ctx.client(), "c1", ConnectorAction::Pause).await.unwrap_err();
    assert!(matches!(err, CliError::ActionFailed { code: 200, .. }));
}

#[tokio::test]
async fn test_resume_failure_carries_code_and_reason() {
    let ctx = TestContext::new().await;
    ctx.mock_exists("c1").await;
    Mock::given(method("PUT"))
        .and(path("/connectors/c1/resume"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error_code": 409,
            "message": "Cannot complete request momentarily due to no known leader URL"
        })))
        .mount(&ctx.server)
        .await;

    let err = dispatch(&ctx.client(), "c1", ConnectorAction::Resume).await.unwrap_err();
    match err {
        CliError::ActionFailed { code, reason } => {
            assert_eq!(code, 409);
            assert!(reason.contains("no known leader"));
        }
        other => panic!("expected action failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_action_on_unknown_connector_is_not_sent() {
    let ctx = TestContext::new().await;
    ctx.mock_missing("ghost").await;
    Mock::given(method("PUT"))
        .and(path("/connectors/ghost/pause"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let err = dispatch(&ctx.client(), "ghost", ConnectorAction::Pause).await.unwrap_err();
    assert!(matches!(err, CliError::UnknownConnector(ref name) if name == "ghost"));
}

#[tokio::test]
async fn test_restart_uses_post_and_accepts_200() {
    let ctx = TestContext::new().await;
    ctx.mock_exists("c1").await;
    Mock::given(method("POST"))
        .and(path("/connectors/c1/restart"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let outcome = dispatch(&ctx.client(), "c1", ConnectorAction::Restart).await.unwrap();
    assert_eq!(outcome.result, "restarted");
}

#[tokio::test]
async fn test_restart_rejects_202() {
    let ctx = TestContext::new().await;
    ctx.mock_exists("c1").await;
    Mock::given(method("POST"))
        .and(path("/connectors/c1/restart"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&ctx.server)
        .await;

    let err = dispatch(&ctx.client(), "c1", ConnectorAction::Restart).await.unwrap_err();
    assert!(matches!(err, CliError::ActionFailed { code: 202, .. }));
}

#[tokio::test]
async fn test_delete_accepts_default_204() {
    let ctx = TestContext::new().await;
    ctx.mock_exists("c1").await;
    Mock::given(method("DELETE"))
        .and(path("/connectors/c1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let outcome = dispatch(&ctx.client(), "c1", ConnectorAction::Delete).await.unwrap();
    assert_eq!(outcome.result, "deleted");
}

#[tokio::test]
async fn test_delete_uses_configured_success_code() {
    let ctx = TestContext::new().await;
    ctx.mock_exists("c1").await;
    Mock::given(method("DELETE"))
        .and(path("/connectors/c1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&ctx.server)
        .await;

    let client = ctx.client_with(|config| config.delete_success_code = 200);
    let err = dispatch(&client, "c1", ConnectorAction::Delete).await.unwrap_err();
    assert!(matches!(err, CliError::ActionFailed { code: 204, .. }));
}

#[tokio::test]
async fn test_invalid_action_makes_no_requests() {
    let ctx = TestContext::new().await;
    ctx.mock_exists("c1").await;

    let err = dispatch_named(&ctx.client(), "c1", "stop").await.unwrap_err();
    assert!(matches!(err, CliError::InvalidAction(ref action) if action == "stop"));
    assert_eq!(ctx.request_count().await, 0);
}

#[tokio::test]
async fn test_dispatch_named_resume() {
    let ctx = TestContext::new().await;
    ctx.mock_exists("c1").await;
    Mock::given(method("PUT"))
        .and(path("/connectors/c1/resume"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let outcome = dispatch_named(&ctx.client(), "c1", "resume").await.unwrap();
    assert_eq!(outcome.action, ConnectorAction::Resume);
}

#[tokio::test]
async fn test_dispatch_does_not_check_remote_state() {
    let ctx = TestContext::new().await;
    ctx.mock_exists("c1").await;
    Mock::given(method("GET"))
        .and(path("/connectors/c1/status"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/connectors/c1/resume"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&ctx.server)
        .await;

    // Resuming a running connector is not a modelled transition, but the
    // control plane decides
    dispatch(&ctx.client(), "c1", ConnectorAction::Resume).await.unwrap();
}
