use crate::models::lenient;

use serde::{Deserialize, Serialize};

/// A career recommendation produced from a full profile analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub title: String,

    #[serde(
        default,
        deserialize_with = "lenient::percentage",
        skip_serializing_if = "Option::is_none"
    )]
    pub match_percentage: Option<u8>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient::string_list")]
    pub relevant_skills_from_profile: Vec<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub growth_potential: String,
}
