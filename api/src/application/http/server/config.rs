use axum::extract::State;
use rentwise_core::domain::location_analysis::Language;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

/// Settings the front-end needs before its first analysis request.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfigResponse {
    pub default_language: Language,
    pub languages: Vec<Language>,
    #[schema(example = "gpt-4o-mini")]
    pub model: String,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Client configuration",
    responses(
        (status = 200, body = ConfigResponse)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    Response::OK(ConfigResponse {
        default_language: Language::default(),
        languages: Language::SUPPORTED.to_vec(),
        model: state.args.llm.openai_model.clone(),
    })
}
