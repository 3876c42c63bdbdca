use tracing::{debug, error, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    location_analysis::{
        entities::AnalysisResult,
        normalizer::{ParsedOutput, normalize_analysis, parse_model_output},
        ports::{LLMClient, LocationAnalysisService},
        prompts::build_analysis_prompt,
        schema::get_location_analysis_schema,
        value_objects::AnalyzeLocationInput,
    },
};

impl<LLM> LocationAnalysisService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn analyze_location(
        &self,
        input: AnalyzeLocationInput,
    ) -> Result<AnalysisResult, CoreError> {
        let address = input.address.trim();
        if address.is_empty() {
            return Err(CoreError::missing_address());
        }

        if !self.llm_client.is_configured() {
            warn!("analysis requested but no LLM API key is configured");
            return Err(CoreError::missing_api_key());
        }

        let prompt = build_analysis_prompt(address, input.language);
        let response_schema = get_location_analysis_schema();

        info!(
            language = %input.language,
            model = self.llm_client.model_name(),
            "requesting location analysis"
        );

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, response_schema)
            .await?;

        match parse_model_output(&raw_response) {
            ParsedOutput::Json(value) => {
                debug!("model output parsed, normalizing");
                Ok(normalize_analysis(&value, input.language))
            }
            ParsedOutput::Malformed(reason) => {
                error!("Failed to parse LLM response: {}", reason);
                Err(CoreError::MalformedResponse(reason))
            }
        }
    }
}
