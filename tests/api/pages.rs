use axum::body::Body;
use axum::http::{Request, StatusCode};
use coming_soon::RuntimeMode;

use crate::helpers::{read_api_response, read_text, spawn_app, SITE_KEY};

#[tokio::test]
async fn landing_page_is_rendered_for_the_host() {
    let app = spawn_app(RuntimeMode::Production).await;

    let request = Request::builder()
        .uri("/")
        .header("host", "launch.example.org")
        .body(Body::empty())
        .unwrap();
    let response = app.request(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = read_text(response).await;
    assert!(html.contains("<h1>launch.example.org</h1>"));
    assert!(html.contains("Coming Soon."));
    assert!(html.contains(SITE_KEY));
    assert!(html.contains(r#"fetch("/api/contact""#));
}

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app(RuntimeMode::Production).await;

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = app.request(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_text(response).await, r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn form_endpoints_only_accept_post() {
    let app = spawn_app(RuntimeMode::Production).await;

    for (method, uri) in [
        ("GET", "/api/contact"),
        ("PUT", "/api/contact"),
        ("GET", "/api/subscribe"),
        ("DELETE", "/api/subscribe"),
    ] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.request(request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{} {}", method, uri);
        let body = read_api_response(response).await;
        assert!(!body.success);
        assert_eq!(body.message, "Only POST method requests are allowed");
    }
}
