//! Axum route handlers for the Distribution API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::distribution::scorer::{score_breakdown, ScoreBreakdown};
use crate::distribution::validator::validate_json;
use crate::distribution::{distribute_content, get_page_content, Distribution};
use crate::errors::AppError;
use crate::models::resume::{Page, Resume};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributeRequest {
    /// A null or absent resume yields the single pass-through page.
    #[serde(default)]
    pub resume: Option<Resume>,
    /// Page ceiling from the exporter; falls back to the configured default.
    #[serde(default)]
    pub max_pages: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/distribution
///
/// Scores the resume and returns one snapshot per page plus the truncation report.
pub async fn handle_distribute(
    State(state): State<AppState>,
    Json(request): Json<DistributeRequest>,
) -> Result<Json<Distribution>, AppError> {
    let max_pages = resolve_max_pages(&request, &state)?;
    Ok(Json(distribute_content(request.resume.as_ref(), max_pages)))
}

/// POST /api/v1/distribution/pages/:page
///
/// Returns the snapshot for a single 1-indexed page.
pub async fn handle_get_page(
    State(state): State<AppState>,
    Path(page): Path<u32>,
    Json(request): Json<DistributeRequest>,
) -> Result<Json<Page>, AppError> {
    let max_pages = resolve_max_pages(&request, &state)?;
    get_page_content(request.resume.as_ref(), page, max_pages)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Page {page} not found")))
}

/// POST /api/v1/distribution/score
pub async fn handle_score(Json(resume): Json<Resume>) -> Json<ScoreBreakdown> {
    Json(score_breakdown(&resume))
}

/// POST /api/v1/distribution/validate
///
/// Accepts any JSON so hand-crafted or partial results can be checked.
pub async fn handle_validate(Json(payload): Json<Value>) -> Json<ValidateResponse> {
    Json(ValidateResponse {
        valid: validate_json(&payload),
    })
}

fn resolve_max_pages(request: &DistributeRequest, state: &AppState) -> Result<u32, AppError> {
    match request.max_pages {
        Some(0) => Err(AppError::Validation(
            "maxPages must be at least 1".to_string(),
        )),
        Some(n) => Ok(n),
        None => Ok(state.config.default_max_pages),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
