use ca_core::CareerRecommendation;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AnalyzeProfileResponse {
    pub careers: Vec<CareerRecommendation>,
}
