use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::autofix::{autofix, ResumePatch};
use crate::ats::issues::ScoreResult;
use crate::ats::rules::score;
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoFixRequest {
    pub issue_id: String,
    pub document: ResumeDocument,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: String,
}

/// POST /api/v1/ats/score
pub async fn handle_score(Json(document): Json<ResumeDocument>) -> Json<ScoreResult> {
    let result = score(&document);
    info!(
        "ATS score {}/100 with {} issues",
        result.score,
        result.issues.len()
    );
    Json(result)
}

/// POST /api/v1/ats/autofix
pub async fn handle_autofix(
    State(state): State<AppState>,
    Json(req): Json<AutoFixRequest>,
) -> Result<Json<ResumePatch>, AppError> {
    let patch = autofix(&req.issue_id, &req.document, state.text_generator.as_ref()).await?;
    if patch.is_empty() {
        info!("No auto-fix available for '{}'", req.issue_id);
    }
    Ok(Json(patch))
}

/// POST /api/v1/ats/review
///
/// Free-form critique from the text generator. Independent of `score`.
pub async fn handle_review(
    State(state): State<AppState>,
    Json(document): Json<ResumeDocument>,
) -> Result<Json<ReviewResponse>, AppError> {
    let review = state.text_generator.analyze_resume(&document).await?;
    info!("Resume review generated ({} chars)", review.chars().count());
    Ok(Json(ReviewResponse { review }))
}
