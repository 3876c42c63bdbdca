use std::{fmt, time::Duration};

use clap::{Args as ClapArgs, Parser};
use rentwise_core::domain::common::{
    DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL, LLMConfig, RentwiseConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "rentwise-api", version, about = "RentWise location analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/rentwise`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5555"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_LLM_MODEL)]
    pub openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_LLM_BASE_URL)]
    pub openai_base_url: String,

    #[arg(long, env = "LLM_TEMPERATURE", default_value_t = 0.2)]
    pub llm_temperature: f32,

    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub llm_timeout_secs: u64,

    /// Extra attempts for transport failures and 429/5xx responses.
    #[arg(long, env = "LLM_MAX_RETRIES", default_value_t = 0)]
    pub llm_max_retries: u32,
}

impl fmt::Debug for LlmArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmArgs")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("llm_temperature", &self.llm_temperature)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("llm_max_retries", &self.llm_max_retries)
            .finish()
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Emit logs as JSON lines.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl From<LlmArgs> for LLMConfig {
    fn from(args: LlmArgs) -> Self {
        Self {
            api_key: args.openai_api_key.filter(|key| !key.trim().is_empty()),
            model: args.openai_model,
            base_url: args.openai_base_url,
            temperature: args.llm_temperature,
            timeout: Duration::from_secs(args.llm_timeout_secs),
            max_retries: args.llm_max_retries,
        }
    }
}

impl From<Args> for RentwiseConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: args.llm.into(),
        }
    }
}
