pub mod captcha;
pub mod config;
pub mod error;
pub mod handlers;
pub mod landing;
pub mod relay;
pub mod types;
pub mod validation;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

pub use config::{RuntimeMode, Settings};
pub use handlers::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/contact",
            post(handlers::contact).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/subscribe",
            post(handlers::subscribe).fallback(handlers::method_not_allowed),
        )
        .route("/api/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
