use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const DEFAULT_RATING: u8 = 3;

/// A 1-5 rating with a short description for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Rating {
    #[schema(minimum = 1, maximum = 5, example = 4)]
    pub rating: u8,
    #[schema(example = "Well-lit streets with low reported crime.")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub safety: Rating,
    pub accessibility: Rating,
    pub convenience: Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Safety,
    Accessibility,
    Convenience,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Safety,
        Category::Accessibility,
        Category::Convenience,
    ];

    /// Key of the category in the model output and in the HTTP payload.
    pub fn key(self) -> &'static str {
        match self {
            Category::Safety => "safety",
            Category::Accessibility => "accessibility",
            Category::Convenience => "convenience",
        }
    }
}

impl AnalysisResult {
    pub fn get(&self, category: Category) -> &Rating {
        match category {
            Category::Safety => &self.safety,
            Category::Accessibility => &self.accessibility,
            Category::Convenience => &self.convenience,
        }
    }
}
