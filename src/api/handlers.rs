use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::{error::AppResult, middleware::request_id::RequestId, models::GiftQuery};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    /// Newline-joined, numbered list of five suggestions
    pub recommendations: String,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommend five gifts for the submitted query
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(query): Json<GiftQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        occasion = %query.occasion,
        interests = %query.interests,
        budget_min = query.budget_min,
        budget_max = query.budget_max,
        "Processing recommendation request"
    );

    let recommendations = state.recommender.recommend(&query).await?;

    tracing::info!(request_id = %request_id, "Recommendation completed");

    Ok(Json(RecommendationResponse { recommendations }))
}
