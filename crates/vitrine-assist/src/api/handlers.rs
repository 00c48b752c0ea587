use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use super::errors::ApiError;
use super::models::{
    ChatRequest, ChatResponse, HealthResponse, SearchRequest, SearchResponse,
};
use crate::assistant::Assistant;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub assistant: Assistant,
}

/// `POST /api/chat`: answer a shopping question.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let answer = state.assistant.answer(&request.message).await?;
    Ok(Json(ChatResponse {
        response: answer.response,
    }))
}

/// `POST /api/search`: ranked catalog matches without generation.
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = payload?;
    let mut results = state.assistant.retrieve_all(&request.query)?;
    results.truncate(request.limit.unwrap_or_else(|| state.assistant.top_n()));
    Ok(Json(SearchResponse {
        query: request.query,
        count: results.len(),
        results,
    }))
}

/// `GET /health`: readiness of the relevance index.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let index = state
        .assistant
        .index()
        .snapshot()
        .map_err(|e| ApiError::ServiceUnavailable(e.to_string()))?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        records: index.len(),
        vocabulary: index.vocabulary_len(),
    }))
}
