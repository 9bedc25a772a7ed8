//! HTTP endpoints
//!
//! JSON API mirroring the frontend contract: every response carries a
//! `success` flag; errors are reported as `{"success": false, "error": ...}`
//! with an appropriate status code. Chat-turn failures never reach this
//! layer — the orchestrator degrades them to response text.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use sahayak_chat::Turn;
use sahayak_core::Language;

use crate::state::AppState;

const DEFAULT_SESSION: &str = "default";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/greeting", get(greeting))
        .route("/api/stats", get(stats))
        .route("/api/history", get(history))
        .route("/api/history/clear", post(clear_history))
        .route("/api/health", get(health))
        .route("/api/languages", get(languages))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        status,
        Json(json!({ "success": false, "error": message })),
    )
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    success: bool,
    response: String,
    language: Language,
    persona: Option<sahayak_core::Persona>,
    intent: sahayak_core::Intent,
    language_changed: bool,
}

async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> impl IntoResponse {
    let message = body.message.trim();
    if message.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Message is required").into_response();
    }

    let session_id = body.session_id.as_deref().unwrap_or(DEFAULT_SESSION);
    let language_override = body
        .language
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .map(Language::from_name);

    let outcome = state
        .chatbot
        .chat(message, session_id, language_override)
        .await;

    Json(ChatResponse {
        success: true,
        response: outcome.response,
        language: outcome.language,
        persona: outcome.persona,
        intent: outcome.intent,
        language_changed: outcome.language_changed,
    })
    .into_response()
}

#[derive(Debug, Deserialize)]
struct GreetingQuery {
    #[serde(default)]
    language: Option<String>,
}

async fn greeting(
    State(state): State<AppState>,
    Query(query): Query<GreetingQuery>,
) -> impl IntoResponse {
    let language = query.language.as_deref().unwrap_or("English");
    Json(json!({
        "success": true,
        "greeting": state.chatbot.greeting_for(language),
        "language": language,
    }))
}

async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "success": true, "stats": state.chatbot.stats() }))
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    #[serde(default)]
    session_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct HistoryResponse {
    success: bool,
    session_id: String,
    history: Vec<Turn>,
}

async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> impl IntoResponse {
    let session_id = query
        .session_id
        .unwrap_or_else(|| DEFAULT_SESSION.to_string());
    let history = state.chatbot.history(&session_id);
    Json(HistoryResponse {
        success: true,
        session_id,
        history,
    })
}

#[derive(Debug, Deserialize)]
struct ClearHistoryRequest {
    #[serde(default)]
    session_id: Option<String>,
}

async fn clear_history(
    State(state): State<AppState>,
    Json(body): Json<ClearHistoryRequest>,
) -> impl IntoResponse {
    let session_id = body
        .session_id
        .unwrap_or_else(|| DEFAULT_SESSION.to_string());
    state.chatbot.clear_history(&session_id);
    Json(json!({
        "success": true,
        "message": format!("History cleared for session: {session_id}"),
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.chatbot.stats();
    Json(json!({
        "success": true,
        "status": "healthy",
        "service": "Sahayak AI",
        "knowledge_base_loaded": true,
        "schemes_count": stats.total_schemes,
        "wards_count": stats.total_wards,
    }))
}

async fn languages() -> impl IntoResponse {
    let languages: Vec<_> = [Language::English, Language::Hindi, Language::Marathi]
        .iter()
        .map(|l| {
            json!({
                "code": l.selector(),
                "name": l.as_str(),
                "native": l.native_name(),
            })
        })
        .collect();
    Json(json!({ "success": true, "languages": languages }))
}
