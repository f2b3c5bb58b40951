//! Thin HTTP adapter over [`ChainService`].
//!
//! Validation failures map to 400 with the error's message, "no chain" maps
//! to 404, results go out as JSON arrays. CORS is permissive for the browser
//! frontend.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::service::ChainService;

pub struct AppState {
    pub chains: ChainService,
}

#[derive(Deserialize)]
pub struct ChainRequest {
    pub source: String,
    pub target: String,
}

#[derive(Deserialize)]
pub struct AnagramRequest {
    pub word: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/wordchain", post(word_chain))
        .route("/anagram", post(anagram))
        .route("/api/health", get(api_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn word_chain(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChainRequest>,
) -> impl IntoResponse {
    match state.chains.find_chain(&req.source, &req.target) {
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            "sorry, no chain connects those two words".to_string(),
        )
            .into_response(),
        Ok(Some(chain)) => Json(chain).into_response(),
    }
}

async fn anagram(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnagramRequest>,
) -> impl IntoResponse {
    match state.chains.anagrams(&req.word) {
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        Ok(hits) => Json(hits).into_response(),
    }
}

async fn api_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let index = state.chains.index();
    Json(json!({
        "words": index.len(),
        "word_length": index.word_length(),
        "alphabet": index.alphabet().len(),
    }))
}

/// Bind and serve until shutdown.
pub async fn serve(state: Arc<AppState>, bind: &str) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(%bind, "word-chain listening");
    axum::serve(listener, app).await
}
