use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display language of an analysis. Unknown codes resolve to English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
    Es,
}

impl Language {
    pub const SUPPORTED: [Language; 3] = [Language::En, Language::Zh, Language::Es];

    /// Resolves a language code such as `"zh"`, `"ES"` or `"zh-CN"`.
    /// Only the primary subtag is considered.
    pub fn from_code(code: &str) -> Self {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "zh" => Language::Zh,
            "es" => Language::Es,
            _ => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeLocationInput {
    pub address: String,
    pub language: Language,
}
