use tracing::{info, warn};

use crate::{
    domain::common::{RentwiseConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::OpenAILLMClient,
};

pub type RentwiseService = Service<OpenAILLMClient>;

pub fn create_service(config: RentwiseConfig) -> Result<RentwiseService, CoreError> {
    if !config.llm.has_api_key() {
        warn!("OPENAI_API_KEY is not set, analyses will return the fallback");
    }

    let llm_client = OpenAILLMClient::new(config.llm)?;
    info!(endpoint = %llm_client.endpoint(), "LLM client ready");

    Ok(Service::new(llm_client))
}
