use crate::application::http::{
    analysis::router::AnalysisApiDoc, health::handlers::get_health, server::config,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RentWise API"
    ),
    paths(get_health::get_health, config::get_config),
    nest(
        (path = "/api", api = AnalysisApiDoc),
    )
)]
pub struct ApiDoc;
