use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use rentwise_core::domain::{
    common::entities::app_errors::CoreError,
    location_analysis::{
        entities::AnalysisResult, ports::LocationAnalysisService,
        value_objects::AnalyzeLocationInput,
    },
};
use tracing::{debug, warn};
use validator::Validate;

use crate::application::http::{
    analysis::validators::AnalyzeLocationRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    summary = "Analyze a location",
    description = "Rates safety, accessibility and convenience of an address using an LLM. \
                   Error responses carry a localized fallback analysis.",
    request_body = AnalyzeLocationRequest,
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, body = ApiErrorResponse, description = "Missing or invalid address"),
        (status = 500, body = ApiErrorResponse, description = "Analysis unavailable"),
    ),
)]
pub async fn analyze_location(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response<AnalysisResult>, ApiError> {
    let body = body.map_err(|e| {
        warn!("Failed to read analysis request body: {}", e);
        ApiError::unexpected(format!("Invalid request body: {}", e))
    })?;

    // The body is decoded by hand so a missing content type is accepted.
    let payload: AnalyzeLocationRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected analysis request body: {}", e);
        ApiError::unexpected(format!("Invalid request body: {}", e))
    })?;

    let language = payload.language();

    payload.validate().map_err(|e| {
        debug!("Invalid analysis request: {}", e);
        ApiError::from_core(CoreError::missing_address(), language)
    })?;

    let result = state
        .service
        .analyze_location(AnalyzeLocationInput {
            address: payload.address.unwrap_or_default(),
            language,
        })
        .await
        .map_err(|e| ApiError::from_core(e, language))?;

    Ok(Response::OK(result))
}
