use crate::domain::location_analysis::value_objects::Language;

/// Builds the instruction sent to the model for `address`.
pub fn build_analysis_prompt(address: &str, language: Language) -> String {
    match language {
        Language::En => format!(
            "You are a location analysis expert. Analyze this location: {address}.\n\
             Provide a brief description and rating (1-5) for each of: \
             1) Safety 2) Accessibility 3) Convenience & Lifestyle.\n\
             Respond only with a JSON object with the keys \"safety\", \"accessibility\" \
             and \"convenience\", each an object with an integer \"rating\" and a \
             \"description\" string."
        ),
        Language::Zh => format!(
            "你是一个位置分析专家。请分析该位置：{address}。\n\
             请分别给出以下三项的简要描述与评分（1-5）：1）安全性 2）便利性 3）生活方式。\n\
             只返回一个 JSON 对象，包含 \"safety\"、\"accessibility\" 和 \"convenience\" 三个键，\
             每个键的值包含整数 \"rating\" 和字符串 \"description\"。"
        ),
        Language::Es => format!(
            "Eres un experto en análisis de ubicaciones. Analiza esta ubicación: {address}.\n\
             Devuelve una descripción breve y una calificación (1-5) para: \
             1) Seguridad 2) Accesibilidad 3) Conveniencia y estilo de vida.\n\
             Responde solo con un objeto JSON con las claves \"safety\", \"accessibility\" \
             y \"convenience\", cada una con un \"rating\" entero y una \"description\" en texto."
        ),
    }
}
