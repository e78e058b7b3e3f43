use ca_core::models::lenient;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Skills or interests to base suggestions on
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
}
