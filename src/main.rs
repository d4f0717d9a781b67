use std::sync::Arc;

use coming_soon::{AppState, RuntimeMode, Settings};
use log::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }
    pretty_env_logger::init_timed();

    let settings = Settings::from_env();
    info!("Settings: {:?}", settings);
    if settings.mode == RuntimeMode::Development {
        warn!("Running in development mode, captcha verification is disabled");
    }
    if settings.relay_access_key.is_empty() {
        warn!("ACCESS_KEY is not set, the relay will reject submissions");
    }

    let addr = format!("0.0.0.0:{}", settings.port);
    let state = Arc::new(AppState::new(settings)?);
    let app = coming_soon::app(state);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
