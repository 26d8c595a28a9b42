//! HTTP handlers: the HTML search page and the JSON API
//!
//! Both go through the shared LookupService.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use super::service::{DatasetStats, LookupService};
use crate::controller::SearchController;
use crate::models::Record;
use crate::page::render_page;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct RecordResponse {
    pub code: String,
    pub city: String,
    pub state: String,
    pub location: String,
}

impl From<&Record> for RecordResponse {
    fn from(r: &Record) -> Self {
        Self {
            code: r.code.clone(),
            city: r.city.clone(),
            state: r.state.clone(),
            location: r.location(),
        }
    }
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<RecordResponse>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

// ============================================================================
// Handlers
// ============================================================================

pub type AppState = Arc<LookupService>;

/// GET /
pub async fn index(State(service): State<AppState>) -> Html<String> {
    let controller = SearchController::new(service.as_ref().clone());
    Html(render_page("", &controller.render()))
}

/// GET /search?q=...
pub async fn search_page(
    State(service): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Html<String> {
    let mut controller = SearchController::new(service.as_ref().clone());
    controller.submit(&params.q);
    Html(render_page(&params.q, &controller.render()))
}

/// GET /api/v1/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /api/v1/stats
pub async fn get_stats(State(service): State<AppState>) -> Json<DatasetStats> {
    Json(service.stats())
}

/// GET /api/v1/search?q=...
pub async fn search(
    State(service): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let results: Vec<RecordResponse> = service
        .find(&params.q)
        .into_iter()
        .map(RecordResponse::from)
        .collect();
    // Echo the query the same way the search page does: trimmed, as typed
    let query = params.q.trim().to_string();
    info!("Search '{}' -> {} result(s)", query, results.len());

    Json(SearchResponse {
        query,
        count: results.len(),
        results,
    })
}

/// GET /api/v1/zipcodes/:code
pub async fn get_zipcode(
    State(service): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<RecordResponse>, (StatusCode, Json<ErrorResponse>)> {
    match service.get(&code) {
        Some(record) => Ok(Json(RecordResponse::from(record))),
        None => Err((StatusCode::NOT_FOUND, Json(ErrorResponse {
            error: format!("Zip code not found: {}", code.trim())
        }))),
    }
}
