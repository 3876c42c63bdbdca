use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    location_analysis::{entities::AnalysisResult, value_objects::AnalyzeLocationInput},
};

/// LLM Client trait for calling AI models
pub trait LLMClient: Send + Sync {
    /// Sends `prompt` and returns the raw text of the model reply.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Whether a credential is available. No network call is made.
    fn is_configured(&self) -> bool;

    fn model_name(&self) -> &str;
}

/// Service trait for location analysis business logic
pub trait LocationAnalysisService: Send + Sync {
    fn analyze_location(
        &self,
        input: AnalyzeLocationInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;
}
