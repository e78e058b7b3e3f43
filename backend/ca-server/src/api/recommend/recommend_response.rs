use ca_core::CareerSuggestion;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub careers: Vec<CareerSuggestion>,

    /// Present when the suggestions are canned rather than generated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
