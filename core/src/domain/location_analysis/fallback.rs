use crate::domain::location_analysis::{
    entities::{AnalysisResult, Category, DEFAULT_RATING, Rating},
    value_objects::Language,
};

/// Placeholder descriptions shown when no live analysis is available.
#[derive(Debug)]
pub struct FallbackText {
    pub safety: &'static str,
    pub accessibility: &'static str,
    pub convenience: &'static str,
}

const FALLBACK_EN: FallbackText = FallbackText {
    safety: "Demo analysis: configure OPENAI_API_KEY to receive live location-specific safety insights.",
    accessibility: "Demo analysis: accessibility details will appear here when the API is configured.",
    convenience: "Demo analysis: convenience and lifestyle details will appear here when the API is configured.",
};

const FALLBACK_ZH: FallbackText = FallbackText {
    safety: "演示分析：配置 OPENAI_API_KEY 后可获取实时且与地点相关的安全性洞察。",
    accessibility: "演示分析：配置 API 后，这里将显示该位置的便利性细节。",
    convenience: "演示分析：配置 API 后，这里将显示生活方式与周边配套细节。",
};

const FALLBACK_ES: FallbackText = FallbackText {
    safety: "Análisis de demostración: configura OPENAI_API_KEY para obtener información real de seguridad por ubicación.",
    accessibility: "Análisis de demostración: aquí aparecerán detalles de accesibilidad cuando la API esté configurada.",
    convenience: "Análisis de demostración: aquí aparecerán detalles de conveniencia y estilo de vida cuando la API esté configurada.",
};

pub fn fallback_text(language: Language) -> &'static FallbackText {
    match language {
        Language::En => &FALLBACK_EN,
        Language::Zh => &FALLBACK_ZH,
        Language::Es => &FALLBACK_ES,
    }
}

pub fn fallback_description(category: Category, language: Language) -> &'static str {
    let text = fallback_text(language);
    match category {
        Category::Safety => text.safety,
        Category::Accessibility => text.accessibility,
        Category::Convenience => text.convenience,
    }
}

/// The complete placeholder analysis for `language`.
pub fn fallback_analysis(language: Language) -> AnalysisResult {
    let rating = |category| Rating {
        rating: DEFAULT_RATING,
        description: fallback_description(category, language).to_string(),
    };

    AnalysisResult {
        safety: rating(Category::Safety),
        accessibility: rating(Category::Accessibility),
        convenience: rating(Category::Convenience),
    }
}
