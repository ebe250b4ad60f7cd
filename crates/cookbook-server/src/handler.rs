use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Json;
use cookbook_types::{EntryRecord, RecipeSummary};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseResponse {
    pub msg: String,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: String,
}

/// Health check handler.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /parse
pub async fn parse_handler(
    body: Result<Json<ParseRequest>, JsonRejection>,
) -> ServerResult<Json<ParseResponse>> {
    let Json(request) = body.map_err(|e| ServerError::MalformedRequest(e.body_text()))?;
    let msg = cookbook_names::normalize(&request.input)?;
    Ok(Json(ParseResponse { msg }))
}

/// POST /entry
pub async fn create_entry_handler(
    State(state): State<AppState>,
    body: Result<Json<EntryRecord>, JsonRejection>,
) -> ServerResult<Json<Value>> {
    let Json(record) = body.map_err(|e| ServerError::MalformedRequest(e.body_text()))?;
    state.gate.admit(record, state.store.as_ref())?;
    Ok(Json(json!({})))
}

/// GET /summary?name=...
pub async fn summary_handler(
    State(state): State<AppState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> ServerResult<Json<RecipeSummary>> {
    let Query(query) = query.map_err(|e| ServerError::MalformedRequest(e.body_text()))?;
    let summary = state.resolver().summarize(&query.name)?;
    tracing::info!(
        recipe = %summary.name,
        cook_time = summary.cook_time,
        "summary served"
    );
    Ok(Json(summary))
}
