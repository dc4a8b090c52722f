use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::conversations::{ChatReply, ChatRequest};
use crate::error::ApiError;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Liveness
        .route("/", get(home))
        .route("/api/health", get(health_check))
        // Chat
        .route("/chat", post(chat))
}

/// Full application with middleware and state attached
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn home() -> Json<Value> {
    Json(json!({ "message": "DeepSeek 1.5B API is running!" }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let llm_healthy = state.pipeline.llm_healthy().await;
    Json(json!({
        "status": "ok",
        "model": state.config.llm_config.model,
        "llm_service": llm_healthy
    }))
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(request) = payload?;
    let span = info_span!("chat", request_id = %Uuid::new_v4());

    async move {
        info!(
            "Chat request (target_language={})",
            request.target_language.as_deref().unwrap_or("english")
        );
        let reply = state.pipeline.run(request).await?;
        Ok::<_, ApiError>(Json(reply))
    }
    .instrument(span)
    .await
}
