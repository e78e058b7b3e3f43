use ca_core::Profile;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeProfileRequest {
    #[serde(default)]
    pub profile_data: Option<Profile>,
}
