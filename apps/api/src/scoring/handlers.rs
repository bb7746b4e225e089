//! Axum route handlers for the WAT API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::results::StoredResult;
use crate::scoring::aggregator::{analyze_test, ResponseRecord, TestAnalysis, TOTAL_WORDS};
use crate::scoring::analyzer::{analyze_response, ResponseAnalysis};
use crate::scoring::word_bank::get_test_words;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct WordsQuery {
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct WordsResponse {
    pub words: Vec<&'static str>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeResponseRequest {
    pub word: String,
    #[serde(default)]
    pub response: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTestRequest {
    pub responses: Vec<ResponseRecord>,
    pub total_time_used: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResultRequest {
    pub user_id: Uuid,
    pub responses: Vec<ResponseRecord>,
    pub total_time_used: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

fn validate_time_used(total_time_used: f64) -> Result<(), AppError> {
    if !total_time_used.is_finite() || total_time_used < 0.0 {
        return Err(AppError::Validation(
            "totalTimeUsed must be a non-negative number of seconds".to_string(),
        ));
    }
    Ok(())
}

fn validate_words(responses: &[ResponseRecord]) -> Result<(), AppError> {
    if let Some(index) = responses.iter().position(|r| r.stimulus.trim().is_empty()) {
        return Err(AppError::Validation(format!(
            "responses[{index}].word cannot be empty"
        )));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/wat/words?count=N
///
/// Returns a shuffled selection of stimulus words (default: a full sitting).
pub async fn handle_get_words(
    Query(params): Query<WordsQuery>,
) -> Result<Json<WordsResponse>, AppError> {
    let requested = params.count.unwrap_or(TOTAL_WORDS as usize);
    if requested == 0 {
        return Err(AppError::Validation("count must be at least 1".to_string()));
    }

    let words = get_test_words(requested);
    Ok(Json(WordsResponse {
        count: words.len(),
        words,
    }))
}

/// POST /api/v1/wat/analyze-response
///
/// Live per-word feedback while the candidate is still typing.
pub async fn handle_analyze_response(
    Json(request): Json<AnalyzeResponseRequest>,
) -> Result<Json<ResponseAnalysis>, AppError> {
    if request.word.trim().is_empty() {
        return Err(AppError::Validation("word cannot be empty".to_string()));
    }

    Ok(Json(analyze_response(&request.word, &request.response)))
}

/// POST /api/v1/wat/analyze
///
/// Scores a complete attempt without storing it.
pub async fn handle_analyze_test(
    Json(request): Json<AnalyzeTestRequest>,
) -> Result<Json<TestAnalysis>, AppError> {
    validate_time_used(request.total_time_used)?;
    validate_words(&request.responses)?;

    let analysis = analyze_test(&request.responses, request.total_time_used);
    info!(
        "Analyzed WAT attempt: {} responses, score {}",
        analysis.total_responses, analysis.overall_score
    );
    Ok(Json(analysis))
}

/// POST /api/v1/wat/results
///
/// Scores a complete attempt and stores it for the user.
pub async fn handle_submit_result(
    State(state): State<AppState>,
    Json(request): Json<SubmitResultRequest>,
) -> Result<Json<StoredResult>, AppError> {
    validate_time_used(request.total_time_used)?;
    validate_words(&request.responses)?;

    let analysis = analyze_test(&request.responses, request.total_time_used);
    let stored = state.result_store.save(request.user_id, &analysis).await?;

    info!(
        "Saved WAT result {} for user {} (score {})",
        stored.result_id, stored.user_id, analysis.overall_score
    );
    Ok(Json(stored))
}

/// GET /api/v1/wat/results?userId=
pub async fn handle_list_results(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<StoredResult>>, AppError> {
    let results = state.result_store.list_for_user(params.user_id).await?;
    Ok(Json(results))
}

/// GET /api/v1/wat/results/:id
pub async fn handle_get_result(
    State(state): State<AppState>,
    Path(result_id): Path<Uuid>,
) -> Result<Json<StoredResult>, AppError> {
    let result = state
        .result_store
        .get(result_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Result {result_id} not found")))?;
    Ok(Json(result))
}
