use super::handlers::analyze_location::{__path_analyze_location, analyze_location};
use crate::application::http::server::app_state::AppState;

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_location))]
pub struct AnalysisApiDoc;

/// Largest accepted analysis request body, in bytes.
pub const ANALYZE_BODY_LIMIT: usize = 64 * 1024;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/analyze", state.args.server.root_path),
        post(analyze_location).layer(DefaultBodyLimit::max(ANALYZE_BODY_LIMIT)),
    )
}
