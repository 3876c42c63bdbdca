use crate::domain::{
    common::services::Service,
    health::{entities::HealthStatus, ports::HealthCheckService},
    location_analysis::ports::LLMClient,
};

impl<LLM> HealthCheckService for Service<LLM>
where
    LLM: LLMClient,
{
    fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".to_string(),
            llm_configured: self.llm_client.is_configured(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
