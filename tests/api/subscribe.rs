use axum::http::StatusCode;
use coming_soon::RuntimeMode;
use httpmock::prelude::*;
use serde_json::json;

use crate::helpers::{spawn_app, ACCESS_KEY, HOST};

#[tokio::test]
async fn subscription_is_relayed() {
    let app = spawn_app(RuntimeMode::Production).await;
    app.mock_captcha("tok", true).await;
    let relay = app
        .relay
        .mock_async(|when, then| {
            when.method(POST).path("/submit").json_body(json!({
                "access_key": ACCESS_KEY,
                "subject": format!("Domain subscription submitted for {}", HOST),
                "email": "ann@example.com"
            }));
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let (status, response) = app
        .post_json("/api/subscribe", Some("tok"), json!({ "email": "ann@example.com" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(response.success);
    assert_eq!(response.message, "Subscribed!");
    relay.assert_async().await;
}

#[tokio::test]
async fn subscription_needs_captcha_then_email() {
    let app = spawn_app(RuntimeMode::Production).await;
    let relay = app.mock_relay(200).await;

    let (status, response) = app
        .post_json("/api/subscribe", None, json!({ "email": "ann@example.com" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message, "Please verify you are not a bot");

    let (status, response) = app
        .post_json("/api/subscribe", Some("tok"), json!({ "email": "ann" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message, "Please enter a valid email address");

    assert_eq!(relay.hits_async().await, 0);
}

#[tokio::test]
async fn subscription_does_not_need_name_or_message() {
    let app = spawn_app(RuntimeMode::Development).await;
    app.mock_relay(200).await;

    let (status, response) = app
        .post_json("/api/subscribe", Some("tok"), json!({ "email": "ann@example.com" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(response.success);
}

#[tokio::test]
async fn relay_failure_is_not_reported_as_success() {
    let app = spawn_app(RuntimeMode::Production).await;
    app.mock_captcha("tok", true).await;
    app.mock_relay(500).await;

    let (status, response) = app
        .post_json("/api/subscribe", Some("tok"), json!({ "email": "ann@example.com" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!response.success);
    assert_eq!(response.message, "Failed! Please try again later");
}

#[tokio::test]
async fn captcha_rejection_blocks_subscription() {
    let app = spawn_app(RuntimeMode::Production).await;
    app.mock_captcha("tok", false).await;
    let relay = app.mock_relay(200).await;

    let (status, response) = app
        .post_json("/api/subscribe", Some("tok"), json!({ "email": "ann@example.com" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message, "Please verify you are not a bot");
    assert_eq!(relay.hits_async().await, 0);
}
