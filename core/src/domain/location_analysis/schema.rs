use serde_json::json;

use crate::domain::location_analysis::entities::Category;

pub const ANALYSIS_SCHEMA_NAME: &str = "rentwise_location_analysis";

fn rating_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "rating": { "type": "number" },
            "description": { "type": "string" }
        },
        "required": ["rating", "description"]
    })
}

/// Returns the JSON schema for location analysis LLM responses
pub fn get_location_analysis_schema() -> serde_json::Value {
    let properties: serde_json::Map<String, serde_json::Value> = Category::ALL
        .iter()
        .map(|category| (category.key().to_string(), rating_schema()))
        .collect();

    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": properties,
        "required": Category::ALL.iter().map(|c| c.key()).collect::<Vec<_>>()
    })
}
